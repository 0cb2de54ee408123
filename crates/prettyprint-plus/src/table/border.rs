//! Border character sets.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Border style for table rendering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    /// Light Unicode box-drawing characters: ┌, ─, ┐, │, └, ┘, ├, ┼, ┤, ┬, ┴
    #[default]
    Light,
    /// ASCII borders: +, -, |
    Ascii,
    /// Heavy Unicode box-drawing characters: ┏, ━, ┓, ┃, ┗, ┛, ┣, ╋, ┫, ┳, ┻
    Heavy,
    /// Double-line Unicode box-drawing: ╔, ═, ╗, ║, ╚, ╝, ╠, ╬, ╣, ╦, ╩
    Double,
    /// Rounded corners with light lines: ╭, ─, ╮, │, ╰, ╯, ├, ┼, ┤, ┬, ┴
    Rounded,
}

impl BorderStyle {
    pub(crate) fn chars(&self) -> BorderChars {
        match self {
            BorderStyle::Ascii => BorderChars {
                horizontal: '-',
                vertical: '|',
                top: ['+', '+', '+'],
                middle: ['+', '+', '+'],
                bottom: ['+', '+', '+'],
            },
            BorderStyle::Light => BorderChars {
                horizontal: '─',
                vertical: '│',
                top: ['┌', '┬', '┐'],
                middle: ['├', '┼', '┤'],
                bottom: ['└', '┴', '┘'],
            },
            BorderStyle::Heavy => BorderChars {
                horizontal: '━',
                vertical: '┃',
                top: ['┏', '┳', '┓'],
                middle: ['┣', '╋', '┫'],
                bottom: ['┗', '┻', '┛'],
            },
            BorderStyle::Double => BorderChars {
                horizontal: '═',
                vertical: '║',
                top: ['╔', '╦', '╗'],
                middle: ['╠', '╬', '╣'],
                bottom: ['╚', '╩', '╝'],
            },
            BorderStyle::Rounded => BorderChars {
                horizontal: '─',
                vertical: '│',
                top: ['╭', '┬', '╮'],
                middle: ['├', '┼', '┤'],
                bottom: ['╰', '┴', '╯'],
            },
        }
    }
}

impl FromStr for BorderStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(BorderStyle::Light),
            "ascii" => Ok(BorderStyle::Ascii),
            "heavy" => Ok(BorderStyle::Heavy),
            "double" => Ok(BorderStyle::Double),
            "rounded" => Ok(BorderStyle::Rounded),
            other => Err(format!(
                "unknown border style '{}' (expected light, ascii, heavy, double or rounded)",
                other
            )),
        }
    }
}

/// Box-drawing characters for one border style.
///
/// Each horizontal rule is `[left, joint, right]`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct BorderChars {
    pub horizontal: char,
    pub vertical: char,
    pub top: [char; 3],
    pub middle: [char; 3],
    pub bottom: [char; 3],
}

/// Which horizontal rule to draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum LineType {
    Top,
    Middle,
    Bottom,
}

impl BorderChars {
    /// Draws a horizontal rule with a joint at every column boundary.
    ///
    /// Each column spans its width plus one space of padding on either side.
    pub fn rule(&self, line_type: LineType, widths: &[usize]) -> String {
        let [left, joint, right] = match line_type {
            LineType::Top => self.top,
            LineType::Middle => self.middle,
            LineType::Bottom => self.bottom,
        };

        let mut line = String::new();
        line.push(left);
        for (i, &width) in widths.iter().enumerate() {
            if i > 0 {
                line.push(joint);
            }
            line.extend(std::iter::repeat_n(self.horizontal, width + 2));
        }
        line.push(right);
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_light() {
        assert_eq!(BorderStyle::default(), BorderStyle::Light);
    }

    #[test]
    fn parse_style_names() {
        assert_eq!("Rounded".parse::<BorderStyle>(), Ok(BorderStyle::Rounded));
        assert!("dotted".parse::<BorderStyle>().is_err());
    }

    #[test]
    fn light_top_rule() {
        let chars = BorderStyle::Light.chars();
        assert_eq!(chars.rule(LineType::Top, &[4, 3]), "┌──────┬─────┐");
    }

    #[test]
    fn light_middle_and_bottom_rules() {
        let chars = BorderStyle::Light.chars();
        assert_eq!(chars.rule(LineType::Middle, &[1]), "├───┤");
        assert_eq!(chars.rule(LineType::Bottom, &[0, 0]), "└──┴──┘");
    }

    #[test]
    fn ascii_rule() {
        let chars = BorderStyle::Ascii.chars();
        assert_eq!(chars.rule(LineType::Top, &[2, 1]), "+----+---+");
    }

    #[test]
    fn no_columns_draws_corners_only() {
        let chars = BorderStyle::Double.chars();
        assert_eq!(chars.rule(LineType::Top, &[]), "╔╗");
    }
}
