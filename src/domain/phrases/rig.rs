/// Placeholder substituted with the synchronized tripod height.
pub const HEIGHT_TOKEN: &str = "{height}";

phrase_table! {
    /// Camera rigs. Every phrase carries the tripod height token.
    Camera {
        Camera001 => ("camera_001", "Photographed at eye level with a 35mm lens, the camera on a tripod at {height} with a 5 degree downward tilt."),
        Camera002 => ("camera_002", "Photographed from a low heroic angle with a 24mm lens, the tripod set at {height} and tilted upward."),
        Camera003 => ("camera_003", "Photographed at knee level with a 50mm lens, the tripod lowered to {height} for an intimate view."),
        Camera004 => ("camera_004", "Photographed from a high angle with a 35mm lens, the tripod raised to {height} looking down."),
        Camera005 => ("camera_005", "Photographed from directly overhead with a 28mm lens, the rig boomed out at {height}."),
        Camera006 => ("camera_006", "Photographed with a tilted dutch angle on a 35mm lens, the tripod at {height}."),
        Camera007 => ("camera_007", "Photographed as a macro close-up with a 100mm lens, the tripod at {height} emphasizing rich saturated color detail."),
        Camera008 => ("camera_008", "Photographed as a wide establishing shot with an 18mm lens, the tripod at {height}."),
        Camera009 => ("camera_009", "Photographed as a shallow depth of field portrait with an 85mm lens, the tripod at {height}, rendering vibrant color."),
        Camera010 => ("camera_010", "Photographed from a worm's-eye view with a 14mm lens, the tripod nearly on the floor at {height} under cool blue fill."),
    }
}
