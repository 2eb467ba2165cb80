// src/template/consent_doc.rs
//
// Builds the agreement as a standalone SVG document. The exporter rasterizes
// this markup; the Preview step renders the same content with native widgets.

use crate::command::consent_form::FormRecord;
use crate::i18n::{self, Locale};

pub const DOC_WIDTH: f32 = 720.0;
pub const DOC_MARGIN: f32 = 48.0;

const TITLE_SIZE: f32 = 22.0;
const BODY_SIZE: f32 = 13.0;
const LINE_HEIGHT: f32 = 22.0;

const SIG_BOX_WIDTH: f32 = 180.0;
const SIG_BOX_HEIGHT: f32 = 90.0;

const FONT_STACK: &str =
    "Noto Sans CJK SC, Noto Sans SC, Source Han Sans SC, PingFang SC, Microsoft YaHei, sans-serif";

pub fn agreement_title(locale: Locale) -> &'static str {
    i18n::labels(locale).agreement_title
}

pub fn terms(locale: Locale) -> &'static [&'static str] {
    match locale {
        Locale::Zh => &[
            "双方基于真实意愿订立本协议，期间不涉及金钱等利益交换（因履行本协议产生的合理费用视为自愿承担，不计入利益交换行为中）。",
            "双方在本协议约定的活动期间必须确保采取必要的安全与健康防护措施。",
            "经双方协商，本协议约定范围内可以进行的活动内容以双方事先确认的为准。",
            "经双方协商，活动期间可以使用的防护用品以双方事先确认的为准。",
            "未经对方同意，任何一方不得拍摄、录制涉及双方的影像或录音，亦不得向任何第三方出示涉及双方的照片、视频及文字描述。",
            "如一方或双方从事涉及人身伤害或法律明令禁止的行为，均不在本协议允许范围内。",
        ],
        Locale::En => &[
            "Both parties enter into this agreement of their own free will, without any monetary or benefit exchange (reasonable expenses arising from this agreement are considered voluntary and not included in benefit exchange).",
            "Both parties must ensure that necessary safety and health protection measures are taken during the activities covered by this agreement.",
            "The activities permitted under this agreement are limited to those confirmed by both parties in advance through mutual negotiation.",
            "The protective equipment that may be used during the activities is limited to what both parties have confirmed in advance.",
            "Neither party shall, without the consent of the other party, record any images or audio involving the parties, nor show any photos, videos, or written descriptions involving the parties to any third party.",
            "Any conduct involving personal harm or prohibited by law is outside the scope of this agreement.",
        ],
    }
}

/// The sentence binding date, location and the terms list together.
pub fn date_location_clause(record: &FormRecord, locale: Locale) -> String {
    let date = i18n::format_date(locale, &record.date);
    match locale {
        Locale::Zh => format!(
            "甲方与乙方约定在{date}于{}自愿订立本协议，并承诺在以下条款范围内不事后追究对方责任。",
            record.location
        ),
        Locale::En => format!(
            "Party A and Party B agree on {date} at {} to voluntarily enter into this agreement, \
             and promise not to hold the other party responsible afterwards within the following conditions.",
            record.location
        ),
    }
}

/// Rough advance-width estimate: CJK glyphs as a full em, everything else as
/// a bit over half. Good enough for wrapping and underlines without loading
/// font metrics.
fn text_width_estimate(s: &str, font_size: f32) -> f32 {
    s.chars()
        .map(|c| if is_wide(c) { font_size } else { font_size * 0.55 })
        .sum()
}

fn is_wide(c: char) -> bool {
    matches!(c as u32, 0x1100..=0x115F | 0x2E80..=0xA4CF | 0xAC00..=0xD7A3 | 0xF900..=0xFAFF | 0xFE30..=0xFE4F | 0xFF00..=0xFF60 | 0xFFE0..=0xFFE6)
}

/// Greedy wrap against the estimated width. Chinese text breaks per
/// character, English per word.
fn wrap_text(text: &str, locale: Locale, max_width: f32) -> Vec<String> {
    let units: Vec<String> = match locale {
        Locale::Zh => text.chars().map(|c| c.to_string()).collect(),
        Locale::En => text.split_whitespace().map(|w| w.to_string()).collect(),
    };
    let joiner = match locale {
        Locale::Zh => "",
        Locale::En => " ",
    };

    let mut lines = Vec::new();
    let mut line = String::new();

    for unit in units {
        let candidate = if line.is_empty() {
            unit.clone()
        } else {
            format!("{line}{joiner}{unit}")
        };

        if !line.is_empty() && text_width_estimate(&candidate, BODY_SIZE) > max_width {
            lines.push(std::mem::replace(&mut line, unit));
        } else {
            line = candidate;
        }
    }

    if !line.is_empty() {
        lines.push(line);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

fn xml_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

struct SvgBody {
    elements: String,
    cursor_y: f32,
}

impl SvgBody {
    fn new() -> Self {
        Self {
            elements: String::new(),
            cursor_y: DOC_MARGIN,
        }
    }

    fn advance(&mut self, dy: f32) {
        self.cursor_y += dy;
    }

    fn text_at(&mut self, x: f32, size: f32, weight: &str, anchor: &str, content: &str) {
        self.elements.push_str(&format!(
            "  <text x=\"{x}\" y=\"{y}\" font-size=\"{size}\" font-weight=\"{weight}\" \
             text-anchor=\"{anchor}\" font-family=\"{FONT_STACK}\" fill=\"#111827\">{}</text>\n",
            xml_escape(content),
            y = self.cursor_y,
        ));
    }

    fn body_line(&mut self, x: f32, content: &str) {
        self.text_at(x, BODY_SIZE, "normal", "start", content);
        self.advance(LINE_HEIGHT);
    }

    fn underline(&mut self, x: f32, width: f32) {
        let y = self.cursor_y + 3.0;
        self.elements.push_str(&format!(
            "  <line x1=\"{x}\" y1=\"{y}\" x2=\"{}\" y2=\"{y}\" stroke=\"#6b7280\" stroke-width=\"0.8\"/>\n",
            x + width
        ));
    }
}

/// A party line: `label name id-label id-number`, with each value underlined
/// (or an empty ruled blank when unset).
fn party_line(body: &mut SvgBody, label: &str, name: &str, id_label: &str, id_number: &str) {
    let mut x = DOC_MARGIN;

    for (text, underlined) in [
        (label, false),
        (name, true),
        (id_label, false),
        (id_number, true),
    ] {
        if underlined {
            let w = text_width_estimate(text, BODY_SIZE).max(70.0) + 12.0;
            body.underline(x + 6.0, w - 12.0);
            body.text_at(x + 6.0, BODY_SIZE, "normal", "start", text);
            x += w + 8.0;
        } else {
            body.text_at(x, BODY_SIZE, "normal", "start", text);
            x += text_width_estimate(text, BODY_SIZE) + 4.0;
        }
    }

    body.advance(LINE_HEIGHT + 4.0);
}

fn signature_block(body: &mut SvgBody, x: f32, label: &str, data_uri: &str) {
    body.text_at(x, BODY_SIZE, "normal", "start", label);

    let top = body.cursor_y + 8.0;
    if data_uri.is_empty() {
        body.elements.push_str(&format!(
            "  <rect x=\"{x}\" y=\"{top}\" width=\"{SIG_BOX_WIDTH}\" height=\"{SIG_BOX_HEIGHT}\" \
             fill=\"none\" stroke=\"#d1d5db\" stroke-width=\"1\"/>\n"
        ));
    } else {
        // The data URI is already XML-safe (base64 alphabet plus the prefix).
        body.elements.push_str(&format!(
            "  <image x=\"{x}\" y=\"{top}\" width=\"{SIG_BOX_WIDTH}\" height=\"{SIG_BOX_HEIGHT}\" \
             preserveAspectRatio=\"xMidYMid meet\" xlink:href=\"{data_uri}\"/>\n"
        ));
    }
}

/// Assemble the full agreement. Output height depends on how far the wrapped
/// content reaches; width is fixed.
pub fn document_svg(record: &FormRecord, locale: Locale) -> String {
    let content_width = DOC_WIDTH - 2.0 * DOC_MARGIN;
    let labels = i18n::labels(locale);
    let mut body = SvgBody::new();

    // Title
    body.advance(TITLE_SIZE);
    body.text_at(DOC_WIDTH / 2.0, TITLE_SIZE, "bold", "middle", agreement_title(locale));
    body.advance(LINE_HEIGHT * 2.0);

    // Parties
    party_line(
        &mut body,
        labels.party_a_line,
        &record.party_a.name,
        labels.id_number_line,
        &record.party_a.id_number,
    );
    party_line(
        &mut body,
        labels.party_b_line,
        &record.party_b.name,
        labels.id_number_line,
        &record.party_b.id_number,
    );
    body.advance(6.0);

    // Date / location clause
    for line in wrap_text(&date_location_clause(record, locale), locale, content_width) {
        body.body_line(DOC_MARGIN, &line);
    }
    body.advance(8.0);

    // Numbered terms with a hanging indent
    let indent = 24.0;
    for (i, term) in terms(locale).iter().enumerate() {
        let numbered = format!("{}. {}", i + 1, term);
        let mut first = true;
        for line in wrap_text(&numbered, locale, content_width - indent) {
            let x = if first {
                DOC_MARGIN
            } else {
                DOC_MARGIN + indent
            };
            body.body_line(x, &line);
            first = false;
        }
        body.advance(4.0);
    }
    body.advance(LINE_HEIGHT);

    // Signature blocks, two columns
    let col_b_x = DOC_WIDTH / 2.0 + 12.0;
    signature_block(&mut body, DOC_MARGIN, labels.party_a_signed, &record.signature_a);
    signature_block(&mut body, col_b_x, labels.party_b_signed, &record.signature_b);
    body.advance(8.0 + SIG_BOX_HEIGHT + 16.0);

    let height = body.cursor_y + DOC_MARGIN;
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" xmlns:xlink=\"http://www.w3.org/1999/xlink\" \
         width=\"{DOC_WIDTH}\" height=\"{height}\" viewBox=\"0 0 {DOC_WIDTH} {height}\">\n\
         <rect width=\"100%\" height=\"100%\" fill=\"#ffffff\"/>\n{}</svg>\n",
        body.elements
    )
}

// ======================================================
// Unit Tests
// ======================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::consent_form::{ops::set_field, FormField, FormState};

    fn sample_record() -> FormRecord {
        let mut s = FormState::new();
        set_field(&mut s, FormField::PartyAName, "Alice");
        set_field(&mut s, FormField::PartyAIdNumber, "A-1001");
        set_field(&mut s, FormField::PartyBName, "Bob & Co <test>");
        set_field(&mut s, FormField::PartyBIdNumber, "B-2002");
        set_field(&mut s, FormField::DateYear, "2025");
        set_field(&mut s, FormField::DateMonth, "12");
        set_field(&mut s, FormField::DateDay, "15");
        set_field(&mut s, FormField::Location, "123 Main St");
        s.record
    }

    #[test]
    fn svg_contains_title_and_escaped_party_values() {
        let svg = document_svg(&sample_record(), Locale::En);
        assert!(svg.contains("Voluntary Consent Agreement"));
        assert!(svg.contains("Alice"));
        assert!(svg.contains("Bob &amp; Co &lt;test&gt;"));
        assert!(!svg.contains("Bob & Co <test>"));
    }

    #[test]
    fn locale_switches_title_and_terms() {
        let record = sample_record();
        let zh = document_svg(&record, Locale::Zh);
        let en = document_svg(&record, Locale::En);

        assert!(zh.contains("自愿协议同意书"));
        assert!(zh.contains("2025年12月15日"));
        assert!(en.contains("12/15/2025"));
        assert_eq!(terms(Locale::Zh).len(), 6);
        assert_eq!(terms(Locale::En).len(), 6);
    }

    #[test]
    fn unset_signatures_render_empty_boxes() {
        let svg = document_svg(&sample_record(), Locale::En);
        assert_eq!(svg.matches("<rect").count(), 3); // background + two boxes
        assert!(!svg.contains("<image"));
    }

    #[test]
    fn stored_signatures_are_embedded_as_images() {
        let mut record = sample_record();
        record.signature_a = "data:image/png;base64,aGVsbG8=".to_string();
        let svg = document_svg(&record, Locale::Zh);

        assert_eq!(svg.matches("<image").count(), 1);
        assert!(svg.contains("xlink:href=\"data:image/png;base64,aGVsbG8=\""));
        assert_eq!(svg.matches("<rect").count(), 2); // background + party B box
    }

    #[test]
    fn wrap_text_en_keeps_words_within_max_width() {
        let lines = wrap_text(
            "one two three four five six seven eight nine ten",
            Locale::En,
            120.0,
        );
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(text_width_estimate(line, BODY_SIZE) <= 120.0 || !line.contains(' '));
        }
    }

    #[test]
    fn wrap_text_zh_breaks_per_character() {
        let lines = wrap_text("这是一段需要折行的很长的中文文本内容", Locale::Zh, 80.0);
        assert!(lines.len() > 1);
    }
}
