//! Terminal styling keyed by incubation stage.

use incubator_core::Stage;

const RESET: &str = "\x1b[0m";

/// Turns a grid cell into styled terminal text.
pub trait Style {
    fn paint(&self, text: &str, stage: Stage) -> String;
}

/// ANSI SGR escape codes.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiStyle;

impl AnsiStyle {
    /// SGR parameters for a stage.
    pub fn code(stage: Stage) -> &'static str {
        match stage {
            Stage::Empty => "2",
            Stage::New => "37",
            Stage::Week1 => "33;1",
            Stage::Week2 => "36;1",
            // red, blinking, reversed: hatch is close
            Stage::Imminent => "31;5;7",
            Stage::Done => "32;1",
        }
    }
}

impl Style for AnsiStyle {
    fn paint(&self, text: &str, stage: Stage) -> String {
        format!("\x1b[{}m{}{}", Self::code(stage), text, RESET)
    }
}

/// No styling at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainStyle;

impl Style for PlainStyle {
    fn paint(&self, text: &str, _stage: Stage) -> String {
        text.to_string()
    }
}

/// Pick the style for a color setting.
pub fn style_for(color: bool) -> Box<dyn Style + Send + Sync> {
    if color {
        Box::new(AnsiStyle)
    } else {
        Box::new(PlainStyle)
    }
}
