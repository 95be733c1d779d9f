/// Scene id that expands into the technical green-screen backdrop.
pub const TECHNICAL_BACKDROP_SCENE: &str = "green_screen_studio";

phrase_table! {
    /// Body pose of the character.
    Pose {
        ArmsOpenWelcome => ("arms_open_welcome", "standing with arms open in a warm welcoming gesture"),
        StandingNeutral => ("standing_neutral", "standing upright in a relaxed neutral stance"),
        WalkingStride => ("walking_stride", "caught mid-stride while walking forward"),
        SeatedRelaxed => ("seated_relaxed", "seated comfortably with hands resting on the knees"),
        WavingHello => ("waving_hello", "waving hello with one raised paw"),
        HandsOnHips => ("hands_on_hips", "standing confidently with hands on hips"),
        JumpingJoy => ("jumping_joy", "leaping into the air with joy"),
        ThinkingChin => ("thinking_chin", "pondering with one paw on the chin"),
        ReachingUp => ("reaching_up", "stretching up on tiptoes to reach something overhead"),
        PoliteBow => ("polite_bow", "bowing politely from the waist"),
    }
}

phrase_table! {
    /// Facing direction relative to the camera.
    Orientation {
        FrontFacing => ("front_facing", "facing the camera directly"),
        ThreeQuarterLeft => ("three_quarter_left", "turned three-quarters toward camera left"),
        ThreeQuarterRight => ("three_quarter_right", "turned three-quarters toward camera right"),
        ProfileLeft => ("profile_left", "shown in left profile"),
        ProfileRight => ("profile_right", "shown in right profile"),
        BackView => ("back_view", "seen from behind, glancing over one shoulder"),
    }
}

phrase_table! {
    /// Set the character is placed in.
    Scene {
        PiazzaV2 => ("piazza_v2", "in a sunlit Italian piazza with terracotta facades and a stone fountain"),
        ForestClearing => ("forest_clearing", "in a mossy forest clearing ringed by felt toadstools"),
        CozyKitchen => ("cozy_kitchen", "in a cozy cottage kitchen with copper pots on the walls"),
        MarketStreet => ("market_street", "on a bustling market street lined with striped awnings"),
        SeasidePier => ("seaside_pier", "on a weathered seaside pier with bobbing fishing boats"),
        ToyWorkshop => ("toy_workshop", "in a cluttered toy workshop full of half-finished puppets"),
        SnowyVillage => ("snowy_village", "in a snowy alpine village at the edge of a pine wood"),
        RooftopGarden => ("rooftop_garden", "in a rooftop garden overlooking miniature chimneys"),
    }
}

/// Fixed studio-rig description used for the technical backdrop scene.
pub(crate) const TECHNICAL_BACKDROP: [&str; 3] = [
    "Isolated against a seamless chroma green backdrop.",
    "The studio rig uses an evenly lit green cyclorama with no visible seams, props or cast shadows on the walls.",
    "The character stands on a matte green floor with only a soft contact shadow beneath the feet.",
];

/// Extra sentence appended to the backdrop when placement reference is requested.
pub(crate) const PLACEMENT_REFERENCE: &str =
    "A small cross-shaped floor marker indicates the placement reference point directly beneath the character.";
