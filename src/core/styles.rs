//! Colour roles shared by scan output and clap's help screens
//!
//! Nothing here consults global colour state: callers decide once (flags,
//! `NO_COLOR`, TTY) and pass the answer to [`StyleRole::paint`].
//!
//! ```
//! use sourcescan::core::styles::StyleRole;
//! assert_eq!(StyleRole::Header.paint("FOUND in:", false), "FOUND in:");
//! let painted = StyleRole::Header.paint("FOUND in:", true);
//! assert!(painted.starts_with("\x1b[") && painted.ends_with("\x1b[0m"));
//! ```

use clap::builder::styling::{AnsiColor, Color as ClapColor, RgbColor, Style, Styles};
use colored::Color;

// role => (colour, bold)
macro_rules! style {
    ( $( $variant:ident => ($color:expr, $bold:expr) ),+ $(,)? ) => {
        #[derive(Copy, Clone, Debug, PartialEq, Eq)]
        pub enum StyleRole { $( $variant ),+ }

        impl StyleRole {
            pub fn color(self) -> Option<Color> {
                match self { $( StyleRole::$variant => $color ),+ }
            }

            pub fn is_bold(self) -> bool {
                match self { $( StyleRole::$variant => $bold ),+ }
            }
        }
    }
}

style! {
    Header      => (Some(Color::Yellow), true),
    Path        => (Some(Color::BrightCyan), false),
    LineNumber  => (Some(Color::BrightGreen), false),
    Literal     => (Some(Color::Cyan), false),
    Placeholder => (Some(Color::Green), false),
    Invalid     => (Some(Color::Red), false),
    Error       => (Some(Color::BrightRed), true),
    Text        => (None, false),
}

impl StyleRole {
    /// SGR parameters for this role, `None` if it is rendered plain
    pub fn sgr(self) -> Option<String> {
        let mut params = Vec::new();
        if self.is_bold() {
            params.push("1".to_string());
        }
        if let Some(color) = self.color() {
            params.push(color.to_fg_str().into_owned());
        }
        (!params.is_empty()).then(|| params.join(";"))
    }

    pub fn paint(self, text: &str, enabled: bool) -> String {
        match self.sgr() {
            Some(sgr) if enabled => format!("\x1b[{}m{}\x1b[0m", sgr, text),
            _ => text.to_string(),
        }
    }

    fn clap_style(self) -> Style {
        let style = Style::new().fg_color(self.color().map(to_clap_color));
        if self.is_bold() {
            style.bold()
        } else {
            style
        }
    }
}

fn to_clap_color(color: Color) -> ClapColor {
    let ansi = match color {
        Color::Black => AnsiColor::Black,
        Color::Red => AnsiColor::Red,
        Color::Green => AnsiColor::Green,
        Color::Yellow => AnsiColor::Yellow,
        Color::Blue => AnsiColor::Blue,
        Color::Magenta => AnsiColor::Magenta,
        Color::Cyan => AnsiColor::Cyan,
        Color::White => AnsiColor::White,
        Color::BrightBlack => AnsiColor::BrightBlack,
        Color::BrightRed => AnsiColor::BrightRed,
        Color::BrightGreen => AnsiColor::BrightGreen,
        Color::BrightYellow => AnsiColor::BrightYellow,
        Color::BrightBlue => AnsiColor::BrightBlue,
        Color::BrightMagenta => AnsiColor::BrightMagenta,
        Color::BrightCyan => AnsiColor::BrightCyan,
        Color::BrightWhite => AnsiColor::BrightWhite,
        Color::TrueColor { r, g, b } => return ClapColor::Rgb(RgbColor(r, g, b)),
        #[allow(unreachable_patterns)]
        _ => AnsiColor::White,
    };
    ClapColor::Ansi(ansi)
}

/// Help and error styling for clap, plain when colour is off
pub fn palette_to_clap(enabled: bool) -> Styles {
    if !enabled {
        return Styles::plain();
    }

    Styles::styled()
        .header(StyleRole::Header.clap_style())
        .usage(StyleRole::Header.clap_style())
        .literal(StyleRole::Literal.clap_style())
        .placeholder(StyleRole::Placeholder.clap_style())
        .valid(StyleRole::Placeholder.clap_style())
        .invalid(StyleRole::Invalid.clap_style())
        .error(StyleRole::Error.clap_style())
}
