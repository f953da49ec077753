//! Static font-metric tables for the three PDF base font families.
//!
//! Character widths are in em units (relative to font size), taken from the
//! Adobe AFM data for the base-14 fonts. This is an intentional approximation:
//! bold and oblique variants reuse the regular table with a width factor, which
//! catches real wrapping decisions while tolerating ±1–2% ambiguity at line
//! ends. All tables cover ASCII 0x20..=0x7E (95 printable characters);
//! index = (char as usize) - 32. Non-ASCII falls back to an average width.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Font family and style
// ────────────────────────────────────────────────────────────────────────────

/// The three font families the templates draw from. Each maps onto a base-14
/// PostScript font in the PDF writer (Helvetica, Times, Courier).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontFamily {
    Sans,
    Serif,
    Mono,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontStyle {
    #[default]
    Regular,
    Bold,
    Italic,
}

/// Width factor applied on top of the regular table for bold text.
/// Helvetica-Bold runs ~5% wider than Helvetica on prose; Courier is fixed
/// pitch so the factor is skipped for Mono.
const BOLD_WIDTH_FACTOR: f32 = 1.05;

// ────────────────────────────────────────────────────────────────────────────
// Page geometry
// ────────────────────────────────────────────────────────────────────────────

/// Geometry of a single exported page, in PDF points (1/72 in).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PageMetrics {
    pub width_pt: f32,
    pub height_pt: f32,
    pub margin_pt: f32,
}

impl PageMetrics {
    /// A4 portrait — 210mm × 297mm, the paper size the export targets.
    pub fn a4() -> Self {
        Self {
            width_pt: 595.28,
            height_pt: 841.89,
            margin_pt: 48.0,
        }
    }

    /// Horizontal space available to content.
    pub fn content_width_pt(&self) -> f32 {
        self.width_pt - 2.0 * self.margin_pt
    }

    /// Vertical space available to content on one page — the strip height the
    /// pagination slices by.
    pub fn usable_height_pt(&self) -> f32 {
        self.height_pt - 2.0 * self.margin_pt
    }

    /// Content width in em units at the given font size.
    pub fn content_width_em(&self, font_size_pt: f32) -> f32 {
        self.content_width_pt() / font_size_pt
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Font metric table
// ────────────────────────────────────────────────────────────────────────────

/// Static character-width table for one font family.
///
/// All widths are in em units at 1em. `widths[i]` = width of ASCII character
/// `(i + 32)`, covering 0x20 (space) through 0x7E (~).
pub struct FontMetricTable {
    pub family: FontFamily,
    widths: [f32; 95],
    /// Fallback width for characters outside 0x20..=0x7E.
    pub average_char_width: f32,
    pub space_width: f32,
}

impl FontMetricTable {
    /// Measures the rendered width of a string in em units.
    pub fn measure_str(&self, s: &str, style: FontStyle) -> f32 {
        let base: f32 = s
            .chars()
            .map(|c| {
                let code = c as usize;
                if (32..=126).contains(&code) {
                    self.widths[code - 32]
                } else {
                    self.average_char_width
                }
            })
            .sum();
        if style == FontStyle::Bold && self.family != FontFamily::Mono {
            base * BOLD_WIDTH_FACTOR
        } else {
            base
        }
    }

    /// Greedy word-wrap: breaks `s` into lines no wider than `max_width_em`.
    /// A single word wider than the line is placed alone and allowed to
    /// overhang (the writer clips nothing; this mirrors how the source preview
    /// handled unbreakable tokens).
    pub fn wrap_lines(&self, s: &str, style: FontStyle, max_width_em: f32) -> Vec<String> {
        let words: Vec<&str> = s.split_whitespace().collect();
        if words.is_empty() {
            return Vec::new();
        }

        let mut lines = Vec::new();
        let mut current = String::new();
        let mut current_width = 0.0_f32;

        for word in words {
            let word_w = self.measure_str(word, style);
            if current.is_empty() {
                current.push_str(word);
                current_width = word_w;
                continue;
            }
            if current_width + self.space_width + word_w > max_width_em {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
                current_width = word_w;
            } else {
                current.push(' ');
                current.push_str(word);
                current_width += self.space_width + word_w;
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
        lines
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Static width tables (95 ASCII printable characters each)
// ────────────────────────────────────────────────────────────────────────────

/// Helvetica — the Sans family. Widths from the Helvetica AFM, /1000.
static HELVETICA_TABLE: FontMetricTable = FontMetricTable {
    family: FontFamily::Sans,
    #[rustfmt::skip]
    widths: [
        // sp     !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
        0.278, 0.278, 0.355, 0.556, 0.556, 0.889, 0.667, 0.191, 0.333, 0.333, 0.389, 0.584, 0.278, 0.333, 0.278, 0.278,
        // 0      1      2      3      4      5      6      7      8      9
        0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556,
        // :      ;      <      =      >      ?      @
        0.278, 0.278, 0.584, 0.584, 0.584, 0.556, 1.015,
        // A      B      C      D      E      F      G      H      I      J      K      L      M
        0.667, 0.667, 0.722, 0.722, 0.667, 0.611, 0.778, 0.722, 0.278, 0.500, 0.667, 0.556, 0.833,
        // N      O      P      Q      R      S      T      U      V      W      X      Y      Z
        0.722, 0.778, 0.667, 0.778, 0.722, 0.667, 0.611, 0.722, 0.667, 0.944, 0.667, 0.667, 0.611,
        // [      \      ]      ^      _      `
        0.278, 0.278, 0.278, 0.469, 0.556, 0.333,
        // a      b      c      d      e      f      g      h      i      j      k      l      m
        0.556, 0.556, 0.500, 0.556, 0.556, 0.278, 0.556, 0.556, 0.222, 0.222, 0.500, 0.222, 0.833,
        // n      o      p      q      r      s      t      u      v      w      x      y      z
        0.556, 0.556, 0.556, 0.556, 0.333, 0.500, 0.278, 0.556, 0.500, 0.722, 0.500, 0.500, 0.500,
        // {      |      }      ~
        0.334, 0.260, 0.334, 0.584,
    ],
    average_char_width: 0.513,
    space_width: 0.278,
};

/// Times-Roman — the Serif family. Widths from the Times-Roman AFM, /1000.
static TIMES_TABLE: FontMetricTable = FontMetricTable {
    family: FontFamily::Serif,
    #[rustfmt::skip]
    widths: [
        // sp     !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
        0.250, 0.333, 0.408, 0.500, 0.500, 0.833, 0.778, 0.180, 0.333, 0.333, 0.500, 0.564, 0.250, 0.333, 0.250, 0.278,
        // 0      1      2      3      4      5      6      7      8      9
        0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.500,
        // :      ;      <      =      >      ?      @
        0.278, 0.278, 0.564, 0.564, 0.564, 0.444, 0.921,
        // A      B      C      D      E      F      G      H      I      J      K      L      M
        0.722, 0.667, 0.667, 0.722, 0.611, 0.556, 0.722, 0.722, 0.333, 0.389, 0.722, 0.611, 0.889,
        // N      O      P      Q      R      S      T      U      V      W      X      Y      Z
        0.722, 0.722, 0.556, 0.722, 0.667, 0.556, 0.611, 0.722, 0.722, 0.944, 0.722, 0.722, 0.611,
        // [      \      ]      ^      _      `
        0.333, 0.278, 0.333, 0.469, 0.500, 0.333,
        // a      b      c      d      e      f      g      h      i      j      k      l      m
        0.444, 0.500, 0.444, 0.500, 0.444, 0.333, 0.500, 0.500, 0.278, 0.278, 0.500, 0.278, 0.778,
        // n      o      p      q      r      s      t      u      v      w      x      y      z
        0.500, 0.500, 0.500, 0.500, 0.333, 0.389, 0.278, 0.500, 0.500, 0.722, 0.500, 0.500, 0.444,
        // {      |      }      ~
        0.480, 0.200, 0.480, 0.541,
    ],
    average_char_width: 0.487,
    space_width: 0.250,
};

/// Courier — the Mono family. Fixed pitch: every glyph is 600/1000 em.
static COURIER_TABLE: FontMetricTable = FontMetricTable {
    family: FontFamily::Mono,
    widths: [0.6; 95],
    average_char_width: 0.6,
    space_width: 0.6,
};

/// Returns the static metric table for a font family.
pub fn get_metrics(family: FontFamily) -> &'static FontMetricTable {
    match family {
        FontFamily::Sans => &HELVETICA_TABLE,
        FontFamily::Serif => &TIMES_TABLE,
        FontFamily::Mono => &COURIER_TABLE,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_str_empty_is_zero() {
        let metrics = get_metrics(FontFamily::Sans);
        assert_eq!(metrics.measure_str("", FontStyle::Regular), 0.0);
    }

    #[test]
    fn test_measure_str_helvetica_word() {
        let metrics = get_metrics(FontFamily::Sans);
        // "Hi" = H(0.722) + i(0.222) = 0.944
        let width = metrics.measure_str("Hi", FontStyle::Regular);
        assert!((width - 0.944).abs() < 1e-4, "expected 0.944, got {width}");
    }

    #[test]
    fn test_bold_is_wider_than_regular_for_sans() {
        let metrics = get_metrics(FontFamily::Sans);
        let regular = metrics.measure_str("Experience", FontStyle::Regular);
        let bold = metrics.measure_str("Experience", FontStyle::Bold);
        assert!(bold > regular);
    }

    #[test]
    fn test_bold_factor_skipped_for_mono() {
        let metrics = get_metrics(FontFamily::Mono);
        let regular = metrics.measure_str("Experience", FontStyle::Regular);
        let bold = metrics.measure_str("Experience", FontStyle::Bold);
        assert_eq!(regular, bold);
    }

    #[test]
    fn test_mono_width_is_fixed_pitch() {
        let metrics = get_metrics(FontFamily::Mono);
        let width = metrics.measure_str("abc", FontStyle::Regular);
        assert!((width - 1.8).abs() < 1e-4);
    }

    #[test]
    fn test_non_ascii_falls_back_to_average() {
        let metrics = get_metrics(FontFamily::Serif);
        let width = metrics.measure_str("é", FontStyle::Regular);
        assert!((width - metrics.average_char_width).abs() < 1e-4);
    }

    #[test]
    fn test_wrap_lines_empty_string() {
        let metrics = get_metrics(FontFamily::Sans);
        assert!(metrics
            .wrap_lines("", FontStyle::Regular, 40.0)
            .is_empty());
    }

    #[test]
    fn test_wrap_lines_short_text_single_line() {
        let metrics = get_metrics(FontFamily::Sans);
        let lines = metrics.wrap_lines("Senior Product Designer", FontStyle::Regular, 40.0);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0], "Senior Product Designer");
    }

    #[test]
    fn test_wrap_lines_breaks_long_text() {
        let metrics = get_metrics(FontFamily::Sans);
        let text = "word ".repeat(40);
        let lines = metrics.wrap_lines(&text, FontStyle::Regular, 10.0);
        assert!(lines.len() > 1);
        // No line may exceed the budget (single-word overhang aside).
        for line in &lines {
            assert!(metrics.measure_str(line, FontStyle::Regular) <= 10.0 + 1e-3);
        }
    }

    #[test]
    fn test_wrap_lines_preserves_all_words() {
        let metrics = get_metrics(FontFamily::Serif);
        let text = "Led the redesign of the flagship SaaS platform resulting in a 20% \
                    increase in user engagement";
        let lines = metrics.wrap_lines(text, FontStyle::Regular, 12.0);
        let rejoined = lines.join(" ");
        assert_eq!(rejoined, text.split_whitespace().collect::<Vec<_>>().join(" "));
    }

    #[test]
    fn test_oversized_word_gets_its_own_line() {
        let metrics = get_metrics(FontFamily::Sans);
        let lines = metrics.wrap_lines("a supercalifragilistic b", FontStyle::Regular, 3.0);
        assert!(lines.contains(&"supercalifragilistic".to_string()));
    }

    #[test]
    fn test_a4_metrics_sanity() {
        let page = PageMetrics::a4();
        assert!((page.width_pt - 595.28).abs() < 1e-2);
        assert!((page.height_pt - 841.89).abs() < 1e-2);
        assert!(page.content_width_pt() < page.width_pt);
        assert!(page.usable_height_pt() < page.height_pt);
        // ~45em of content width at 11pt, in the same ballpark as US letter.
        let em = page.content_width_em(11.0);
        assert!(em > 40.0 && em < 50.0, "got {em}");
    }
}
