phrase_table! {
    /// Lighting setups.
    Lighting {
        Lighting001 => ("lighting_001", "Soft key light from camera left at 45 degrees with a gentle fill from the right, balanced to 5600K daylight."),
        Lighting002 => ("lighting_002", "Warm golden-hour sunlight raking low from camera right, casting long soft shadows."),
        Lighting003 => ("lighting_003", "Overcast diffuse skylight with no hard shadows and even exposure across the set."),
        Lighting004 => ("lighting_004", "Dramatic chiaroscuro with a single hard key from above and deep falloff into shadow."),
        Lighting005 => ("lighting_005", "Cool blue moonlight from behind with a faint warm practical glow on the face."),
        Lighting006 => ("lighting_006", "Bright high-key studio lighting with a clean white fill and minimal shadows."),
        Lighting007 => ("lighting_007", "Flickering warm candlelight from below with soft amber bounce on nearby surfaces."),
        Lighting008 => ("lighting_008", "Crisp rim light outlining the silhouette against a darker background."),
        Lighting009 => ("lighting_009", "Dappled sunlight filtering through leaves, scattering small pools of light."),
        Lighting010 => ("lighting_010", "Neon-tinted mixed lighting with magenta and teal accents from off-camera signs."),
    }
}

phrase_table! {
    /// Overall film or animation style.
    FilmType {
        StopMotion => ("stop_motion", "in stop motion style"),
        Claymation => ("claymation", "in claymation style with visible thumbprints"),
        FeltPuppet => ("felt_puppet", "in felted puppet animation style"),
        PaperCutout => ("paper_cutout", "in layered paper cutout animation style"),
        MiniatureDiorama => ("miniature_diorama", "as a tilt-shift miniature diorama"),
        VintageTelevision => ("vintage_television", "in the style of a 1970s children's television special"),
    }
}

phrase_table! {
    /// Surface material of the character and set.
    Texture {
        Texture001 => ("texture_001", "Surfaces show hand-sculpted clay with subtle fingerprints and tool marks."),
        Texture002 => ("texture_002", "Everything is made of soft needle-felted wool with stray fibers catching the light."),
        Texture003 => ("texture_003", "Materials are hand-painted wood with visible brush strokes and grain."),
        Texture004 => ("texture_004", "Fabric costumes use coarse linen with hand-stitched seams."),
        Texture005 => ("texture_005", "Props are crafted from layered cardstock with slightly frayed edges."),
        Texture006 => ("texture_006", "Glossy resin surfaces reflect small specular highlights."),
        Texture007 => ("texture_007", "Knitted yarn textures cover the character with chunky cable patterns."),
        Texture008 => ("texture_008", "Weathered tin and brass details show gentle patina."),
        Texture009 => ("texture_009", "Matte plasticine with a faint dusty sheen covers every surface."),
        Texture010 => ("texture_010", "Velvet flocking gives the character a soft light-absorbing finish."),
    }
}

phrase_table! {
    /// Photographic film stocks.
    FilmStock {
        KodakPortra160 => ("kodak_portra_160", "Shot on Kodak Portra 160 film with fine grain and gentle pastel contrast."),
        KodakPortra400 => ("kodak_portra_400", "Shot on Kodak Portra 400 film with natural warm tones and soft grain."),
        KodakPortra800 => ("kodak_portra_800", "Shot on Kodak Portra 800 film with rich saturation and visible grain."),
        KodakEktar100 => ("kodak_ektar_100", "Shot on Kodak Ektar 100 film with vivid saturated color and ultra-fine grain."),
        FujiVelvia50 => ("fuji_velvia_50", "Shot on Fujichrome Velvia 50 slide film with punchy color and deep blacks."),
        FujiPro400h => ("fuji_pro_400h", "Shot on Fuji Pro 400H film with airy cool highlights and mint greens."),
        Cinestill800t => ("cinestill_800t", "Shot on CineStill 800T tungsten film with red halation around highlights."),
        KodakVision3500t => ("kodak_vision3_500t", "Shot on Kodak Vision3 500T motion picture film with tungsten balance and cinematic latitude."),
        IlfordHp5Plus => ("ilford_hp5_plus", "Shot on Ilford HP5 Plus black and white film with gritty midtones."),
        KodakTriX400 => ("kodak_tri_x_400", "Shot on Kodak Tri-X 400 black and white film with classic contrast."),
        IlfordDelta3200 => ("ilford_delta_3200", "Shot on Ilford Delta 3200 black and white film with heavy grain."),
        IlfordPanF50 => ("ilford_pan_f_50", "Shot on Ilford Pan F Plus 50 black and white film with razor-fine detail."),
    }
}
