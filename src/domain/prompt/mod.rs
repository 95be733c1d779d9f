mod compositor;
mod fragment;
mod skeleton;

pub use compositor::{
    Composition, DEFAULT_SUBJECT, STYLE_SUFFIX, compose, resolve_camera, resolve_film_stock,
    resolve_film_type, resolve_lighting, resolve_output, resolve_palette, resolve_props,
    resolve_scene, resolve_subject, resolve_texture, resolve_wardrobe,
};
pub use fragment::{
    FragmentKind, PromptFragment, SkippedFragment, Slot, capitalize, english_list, join_fragments,
};
pub use skeleton::render_caption;
