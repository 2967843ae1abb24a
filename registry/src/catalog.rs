//! The compiled-in category catalog.

use crate::{Registry, RegistryBuilder, RegistryError};

const MOTORSPORT_CHANNEL: &str = "665554362570899476";
const SPACE_CHANNEL: &str = "811641906685018172";

/// label, channel, image, mention
const BUILTIN: &[(&str, &str, &str, &str)] = &[
    (
        "[Formula1]",
        MOTORSPORT_CHANNEL,
        "https://logodownload.org/wp-content/uploads/2016/11/formula-1-logo-1-1.png",
        "<@&1005570005682901133>",
    ),
    (
        "[Formula2]",
        MOTORSPORT_CHANNEL,
        "https://upload.wikimedia.org/wikipedia/en/thumb/1/1f/Formula_2_logo.svg/1920px-Formula_2_logo.svg.png",
        "",
    ),
    (
        "[Formula3]",
        MOTORSPORT_CHANNEL,
        "https://upload.wikimedia.org/wikipedia/commons/5/5b/FIA_F3_Championship_logo.png",
        "",
    ),
    (
        "[IndyCar]",
        MOTORSPORT_CHANNEL,
        "https://upload.wikimedia.org/wikipedia/en/thumb/b/bb/INDYCAR_logo.svg/1200px-INDYCAR_logo.svg.png",
        "<@&1005573708590633063>",
    ),
    (
        "[IMSA]",
        MOTORSPORT_CHANNEL,
        "https://upload.wikimedia.org/wikipedia/commons/thumb/9/94/IMSA_SportsCar_Championship_logo.svg/2560px-IMSA_SportsCar_Championship_logo.svg.png",
        "<@&1005574680486354964>",
    ),
    (
        "[NASCAR]",
        MOTORSPORT_CHANNEL,
        "https://upload.wikimedia.org/wikipedia/commons/thumb/c/cb/NASCAR_Cup_Series_logo.svg/1200px-NASCAR_Cup_Series_logo.svg.png",
        "<@&1005574994107044021>",
    ),
    (
        "[MotoGP]",
        MOTORSPORT_CHANNEL,
        "https://upload.wikimedia.org/wikipedia/commons/thumb/a/a0/Moto_Gp_logo.svg/1280px-Moto_Gp_logo.svg.png",
        "<@&1005573264619356290>",
    ),
    (
        "[NASA]",
        SPACE_CHANNEL,
        "https://upload.wikimedia.org/wikipedia/commons/thumb/e/e5/NASA_logo.svg/2449px-NASA_logo.svg.png",
        "<@&1004652992416456754>",
    ),
    (
        "[SpaceX]",
        SPACE_CHANNEL,
        "https://www.spacex.com/static/images/share.jpg",
        "<@&1004652992416456754>",
    ),
];

impl Registry {
    /// Build the registry of categories the tool ships with.
    pub fn builtin() -> Result<Self, RegistryError> {
        let mut builder = RegistryBuilder::new();
        for &(label, channel, image, mention) in BUILTIN {
            builder
                .add_category(label, channel)
                .image(image)
                .mention(mention)
                .done()?;
        }
        builder.build()
    }
}
