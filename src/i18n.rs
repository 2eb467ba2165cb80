// src/i18n.rs

use crate::command::consent_form::{DateParts, WizardStep};

/// Presentation-only. Never persisted; every session starts in Chinese.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    Zh,
    En,
}

impl Locale {
    pub fn toggled(self) -> Self {
        match self {
            Locale::Zh => Locale::En,
            Locale::En => Locale::Zh,
        }
    }

    /// Label shown on the language toggle button (names the *other* locale).
    pub fn toggle_label(self) -> &'static str {
        match self {
            Locale::Zh => "English",
            Locale::En => "中文",
        }
    }
}

pub struct Labels {
    pub app_title: &'static str,
    pub agreement_title: &'static str,

    pub step_personal: &'static str,
    pub step_date_location: &'static str,
    pub step_signatures: &'static str,
    pub step_preview: &'static str,

    pub step_personal_heading: &'static str,
    pub party_a_info: &'static str,
    pub party_b_info: &'static str,
    pub party_a_name: &'static str,
    pub party_a_id: &'static str,
    pub party_b_name: &'static str,
    pub party_b_id: &'static str,
    pub personal_hint: &'static str,

    pub step_date_heading: &'static str,
    pub date: &'static str,
    pub year: &'static str,
    pub month: &'static str,
    pub day: &'static str,
    pub location: &'static str,
    pub year_hint: &'static str,
    pub month_hint: &'static str,
    pub day_hint: &'static str,
    pub location_hint: &'static str,
    pub date_note: &'static str,

    pub step_sign_heading: &'static str,
    pub party_a_signature: &'static str,
    pub party_b_signature: &'static str,
    pub clear: &'static str,
    pub draw_mode: &'static str,
    pub upload_mode: &'static str,
    pub upload_click: &'static str,
    pub sign_note: &'static str,

    pub step_preview_heading: &'static str,
    pub party_a_line: &'static str,
    pub party_b_line: &'static str,
    pub id_number_line: &'static str,
    pub party_a_signed: &'static str,
    pub party_b_signed: &'static str,
    pub preview_note: &'static str,

    pub previous: &'static str,
    pub next: &'static str,
    pub export_pdf: &'static str,
    pub export_image: &'static str,
    pub exporting: &'static str,
    pub exported_to: &'static str,
    pub export_pdf_failed: &'static str,
    pub export_image_failed: &'static str,
    pub fill_required: &'static str,
}

static ZH: Labels = Labels {
    app_title: "在线同意书签订平台",
    agreement_title: "自愿协议同意书",

    step_personal: "个人信息",
    step_date_location: "日期和地点",
    step_signatures: "签名",
    step_preview: "预览",

    step_personal_heading: "第1步：填写个人信息",
    party_a_info: "甲方信息",
    party_b_info: "乙方信息",
    party_a_name: "甲方姓名",
    party_a_id: "甲方身份证号",
    party_b_name: "乙方姓名",
    party_b_id: "乙方身份证号",
    personal_hint: "注意：请确保填写真实信息，这将用于生成同意书。",

    step_date_heading: "第2步：日期和地点",
    date: "日期",
    year: "年",
    month: "月",
    day: "日",
    location: "地点",
    year_hint: "如：2025",
    month_hint: "如：12",
    day_hint: "如：15",
    location_hint: "如：上海市浦东新区XX路XX号",
    date_note: "注意：日期和地点信息将显示在同意书上，表明双方同意的时间和地点。",

    step_sign_heading: "第3步：签名",
    party_a_signature: "甲方签名",
    party_b_signature: "乙方签名",
    clear: "清除",
    draw_mode: "手写签名",
    upload_mode: "上传签名",
    upload_click: "点击上传签名图片",
    sign_note: "提示：您可以在上方框内签名，或上传签名图片。",

    step_preview_heading: "第4步：预览同意书",
    party_a_line: "甲方：",
    party_b_line: "乙方：",
    id_number_line: "身份证号：",
    party_a_signed: "甲方签字：",
    party_b_signed: "乙方签字：",
    preview_note: "请仔细核对上述同意书内容。如果需要修改信息，请返回之前的步骤。满意后，您可以导出文档。",

    previous: "上一步",
    next: "下一步",
    export_pdf: "导出PDF",
    export_image: "导出图片",
    exporting: "导出中…",
    exported_to: "已导出：",
    export_pdf_failed: "导出PDF时出错",
    export_image_failed: "导出图片时出错",
    fill_required: "请填写所有必填字段",
};

static EN: Labels = Labels {
    app_title: "Online Consent Agreement",
    agreement_title: "Voluntary Consent Agreement",

    step_personal: "Personal Information",
    step_date_location: "Date and Location",
    step_signatures: "Signatures",
    step_preview: "Preview",

    step_personal_heading: "Step 1: Personal Information",
    party_a_info: "Party A Information",
    party_b_info: "Party B Information",
    party_a_name: "Party A Name",
    party_a_id: "Party A ID Number",
    party_b_name: "Party B Name",
    party_b_id: "Party B ID Number",
    personal_hint: "Note: Please ensure you enter accurate information as it will be used to generate the consent agreement.",

    step_date_heading: "Step 2: Date and Location",
    date: "Date",
    year: "Year",
    month: "Month",
    day: "Day",
    location: "Location",
    year_hint: "e.g., 2025",
    month_hint: "e.g., 12",
    day_hint: "e.g., 15",
    location_hint: "e.g., 123 Main St, New York, NY",
    date_note: "Note: Date and location information will appear on the consent form, indicating when and where both parties agree.",

    step_sign_heading: "Step 3: Signatures",
    party_a_signature: "Party A Signature",
    party_b_signature: "Party B Signature",
    clear: "Clear",
    draw_mode: "Draw Signature",
    upload_mode: "Upload Signature",
    upload_click: "Click to upload signature image",
    sign_note: "Tip: You can sign in the box above or upload a signature image.",

    step_preview_heading: "Step 4: Preview Agreement",
    party_a_line: "Party A: ",
    party_b_line: "Party B: ",
    id_number_line: "ID Number: ",
    party_a_signed: "Party A Signature:",
    party_b_signed: "Party B Signature:",
    preview_note: "Please carefully review the consent agreement above. If you need to modify any information, please return to the previous steps. When satisfied, you can export the document.",

    previous: "Previous",
    next: "Next",
    export_pdf: "Export PDF",
    export_image: "Export Image",
    exporting: "Exporting…",
    exported_to: "Exported: ",
    export_pdf_failed: "Error exporting PDF",
    export_image_failed: "Error exporting image",
    fill_required: "Please fill in all required fields",
};

pub fn labels(locale: Locale) -> &'static Labels {
    match locale {
        Locale::Zh => &ZH,
        Locale::En => &EN,
    }
}

pub fn step_name(locale: Locale, step: WizardStep) -> &'static str {
    let l = labels(locale);
    match step {
        WizardStep::PersonalInfo => l.step_personal,
        WizardStep::DateLocation => l.step_date_location,
        WizardStep::Signatures => l.step_signatures,
        WizardStep::Preview => l.step_preview,
    }
}

/// Locale-ordered date: `2025年12月15日` vs `12/15/2025`.
/// Parts render verbatim; the form never validates them as a calendar date.
pub fn format_date(locale: Locale, date: &DateParts) -> String {
    match locale {
        Locale::Zh => format!("{}年{}月{}日", date.year, date.month, date.day),
        Locale::En => format!("{}/{}/{}", date.month, date.day, date.year),
    }
}

// ======================================================
// Unit Tests
// ======================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_date() -> DateParts {
        DateParts {
            year: "2025".to_string(),
            month: "12".to_string(),
            day: "15".to_string(),
        }
    }

    #[test]
    fn default_locale_is_chinese() {
        assert_eq!(Locale::default(), Locale::Zh);
    }

    #[test]
    fn toggled_flips_both_ways() {
        assert_eq!(Locale::Zh.toggled(), Locale::En);
        assert_eq!(Locale::En.toggled(), Locale::Zh);
    }

    #[test]
    fn date_order_follows_locale() {
        let d = sample_date();
        assert_eq!(format_date(Locale::Zh, &d), "2025年12月15日");
        assert_eq!(format_date(Locale::En, &d), "12/15/2025");
    }

    #[test]
    fn empty_parts_render_verbatim() {
        let d = DateParts::default();
        assert_eq!(format_date(Locale::En, &d), "//");
    }
}
