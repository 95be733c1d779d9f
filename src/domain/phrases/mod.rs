//! Static phrase dictionaries consumed by the compositor.
//!
//! Each dictionary is a closed enum keyed by its wire id. Ids that are not in
//! a dictionary resolve through [`literalize`] instead of failing.

/// Define a closed dictionary enum with `id`, `phrase`, `from_id` and `ALL`.
macro_rules! phrase_table {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident => ($id:literal, $phrase:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every entry in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Wire identifier.
            pub fn id(&self) -> &'static str {
                match self {
                    $($name::$variant => $id),+
                }
            }

            /// Canonical phrase.
            pub fn phrase(&self) -> &'static str {
                match self {
                    $($name::$variant => $phrase),+
                }
            }

            pub fn from_id(id: &str) -> Option<$name> {
                match id.trim() {
                    $($id => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.id())
            }
        }
    };
}

mod costume;
mod look;
mod palette;
mod rig;
mod staging;

pub use costume::{Props, Wardrobe};
pub use look::{FilmStock, FilmType, Lighting, Texture};
pub use palette::NamedPalette;
pub use rig::{Camera, HEIGHT_TOKEN};
pub use staging::{Orientation, Pose, Scene, TECHNICAL_BACKDROP_SCENE};
pub(crate) use staging::{PLACEMENT_REFERENCE, TECHNICAL_BACKDROP};

/// Literal form of an unknown id: underscores become spaces.
pub fn literalize(id: &str) -> String {
    id.trim().replace('_', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literalize_replaces_underscores() {
        assert_eq!(literalize("golden_hour_glow"), "golden hour glow");
        assert_eq!(literalize("  moody "), "moody");
    }

    #[test]
    fn dictionary_ids_round_trip() {
        for entry in Lighting::ALL {
            assert_eq!(Lighting::from_id(entry.id()), Some(*entry));
        }
        for entry in FilmStock::ALL {
            assert_eq!(FilmStock::from_id(entry.id()), Some(*entry));
        }
        for entry in Camera::ALL {
            assert_eq!(Camera::from_id(entry.id()), Some(*entry));
        }
        for entry in Scene::ALL {
            assert_eq!(Scene::from_id(entry.id()), Some(*entry));
        }
    }

    #[test]
    fn unknown_ids_are_not_in_dictionaries() {
        assert_eq!(Lighting::from_id("lighting_999"), None);
        assert_eq!(Texture::from_id(""), None);
    }

    #[test]
    fn camera_phrases_carry_height_token() {
        assert_eq!(Camera::ALL.len(), 10);
        for camera in Camera::ALL {
            assert!(camera.phrase().contains(HEIGHT_TOKEN), "{}", camera);
        }
    }
}
