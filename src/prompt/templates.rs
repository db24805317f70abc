use crate::sequence::style::{Composition, VisualStyle};

/// Placeholder replaced with the video's accent color.
pub const ACCENT_PLACEHOLDER: &str = "[ACCENT_COLOR]";

/// Leading prompt text shared by every image.
///
/// Image models weight early tokens more heavily, so the cinematic look is stated first.
pub const STYLE_PREFIX: &str = "Cinematic photorealistic editorial photograph, dark moody atmosphere, \
desaturated color palette with [ACCENT_COLOR] accent lighting, \
Rembrandt lighting, deep shadows, shallow depth of field, subtle film grain, \
documentary photography style, shot on Arri Alexa, 16:9 cinematic composition, \
epic scale.";

/// Trailing prompt text for a style. Always starts with `", "`.
pub fn style_suffix(style: VisualStyle) -> &'static str {
    match style {
        VisualStyle::Dossier => {
            ", cinematic photorealistic, single dramatic light source, Rembrandt lighting, \
deep shadows, desaturated color palette with [ACCENT_COLOR] accent, shallow \
depth of field, subtle film grain, dark moody atmosphere, documentary \
photography style, shot on Arri Alexa, 16:9"
        }
        VisualStyle::Schema => {
            ", cinematic photorealistic background with translucent glowing data overlay, \
thin luminous [ACCENT_COLOR] connection lines and node points, Bloomberg \
terminal meets surveillance system aesthetic, dark atmosphere, minimal and \
elegant, deep blacks with light-emitting data elements, subtle film grain, \
16:9"
        }
        VisualStyle::Echo => {
            ", photorealistic with subtle oil painting texture, dramatic chiaroscuro \
candlelight lighting, warm amber tones, period-accurate costume and \
architecture detail, deep shadows, slightly soft focus with painterly grain, \
historical documentary style, heavy film grain, atmospheric and evocative, \
16:9"
        }
    }
}

/// Framing instruction for a composition.
pub fn composition_directive(composition: Composition) -> &'static str {
    match composition {
        Composition::Wide => {
            "wide establishing shot, full environment visible, figure small in frame"
        }
        Composition::Medium => "medium shot, figure from waist up in context of environment",
        Composition::Closeup => {
            "close-up detail shot, shallow depth of field, object or hands filling frame"
        }
        Composition::Environmental => {
            "environmental detail, no human figure, architecture or objects telling the story"
        }
        Composition::Portrait => "medium close-up, figure from chest up, face partially in shadow",
        Composition::Overhead => {
            "high angle overhead view, looking down on scene, surveillance perspective"
        }
        Composition::LowAngle => {
            "low angle looking up, figure or structure appearing powerful and imposing"
        }
    }
}
