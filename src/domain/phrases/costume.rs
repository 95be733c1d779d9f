phrase_table! {
    /// Wardrobe pieces, rendered as "Wearing ...".
    Wardrobe {
        RedScarf => ("red_scarf", "a hand-knitted red scarf"),
        DenimOveralls => ("denim_overalls", "patched denim overalls"),
        TweedVest => ("tweed_vest", "a brown tweed vest with brass buttons"),
        YellowRaincoat => ("yellow_raincoat", "a glossy yellow raincoat"),
        CableSweater => ("cable_sweater", "a chunky cream cable-knit sweater"),
        SailorShirt => ("sailor_shirt", "a striped sailor shirt"),
        ApronSmock => ("apron_smock", "a flour-dusted baker's apron"),
        VelvetCape => ("velvet_cape", "a short plum velvet cape"),
    }
}

phrase_table! {
    /// Handheld props, rendered as "Holding ...".
    Props {
        WickerBasket => ("wicker_basket", "a small wicker basket of apples"),
        PaperLantern => ("paper_lantern", "a glowing paper lantern"),
        Umbrella => ("umbrella", "a tiny polka-dot umbrella"),
        Teacup => ("teacup", "a steaming porcelain teacup"),
        PocketWatch => ("pocket_watch", "a brass pocket watch on a chain"),
        Bouquet => ("bouquet", "a bouquet of felt wildflowers"),
        Kite => ("kite", "a diamond kite with a ribbon tail"),
        Letter => ("letter", "a sealed letter with a wax stamp"),
    }
}
