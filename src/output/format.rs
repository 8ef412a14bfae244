use chrono::{Datelike, NaiveDate};
use comfy_table::{
    Attribute, Cell, Color, ContentArrangement, Table, TableComponent,
    modifiers::UTF8_SOLID_INNER_BORDERS, presets::UTF8_FULL,
};

use crate::core::{RecordType, Tone};
use crate::error::AppError;

/// Display language for labels, month names and dates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum Locale {
    #[default]
    En,
    Cs,
}

const MONTHS_EN: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

const MONTHS_CS: [&str; 12] = [
    "Leden", "Únor", "Březen", "Duben", "Květen", "Červen", "Červenec", "Srpen", "Září", "Říjen",
    "Listopad", "Prosinec",
];

/// Genitive forms used inside a full Czech date ("15. března 2024")
const MONTHS_CS_GENITIVE: [&str; 12] = [
    "ledna", "února", "března", "dubna", "května", "června", "července", "srpna", "září", "října",
    "listopadu", "prosince",
];

impl Locale {
    pub(crate) fn from_locale(locale: Option<&str>) -> Result<Self, AppError> {
        let Some(raw) = locale else {
            return Ok(Locale::default());
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(Locale::default());
        }
        let base = trimmed
            .split(['-', '_'])
            .next()
            .unwrap_or(trimmed)
            .to_ascii_lowercase();

        match base.as_str() {
            "en" => Ok(Locale::En),
            "cs" | "cz" => Ok(Locale::Cs),
            _ => Err(AppError::UnsupportedLocale {
                input: trimmed.to_string(),
            }),
        }
    }

    /// `month` is one-indexed; out-of-range values yield "?"
    pub(crate) fn month_name(self, month: u32) -> &'static str {
        let names = match self {
            Locale::En => &MONTHS_EN,
            Locale::Cs => &MONTHS_CS,
        };
        month
            .checked_sub(1)
            .and_then(|i| names.get(i as usize))
            .copied()
            .unwrap_or("?")
    }

    pub(crate) fn bucket_label(self, year: i32, month: u32) -> String {
        format!("{} {year}", self.month_name(month))
    }

    pub(crate) fn format_date(self, date: NaiveDate) -> String {
        let idx = date.month0() as usize;
        match self {
            Locale::En => format!("{} {}, {}", MONTHS_EN[idx], date.day(), date.year()),
            Locale::Cs => format!("{}. {} {}", date.day(), MONTHS_CS_GENITIVE[idx], date.year()),
        }
    }

    pub(crate) fn type_label(self, record_type: RecordType) -> &'static str {
        let meta = record_type.meta();
        match self {
            Locale::En => meta.label_en,
            Locale::Cs => meta.label_cs,
        }
    }

    pub(crate) fn add_label(self, record_type: RecordType) -> &'static str {
        let meta = record_type.meta();
        match self {
            Locale::En => meta.add_label_en,
            Locale::Cs => meta.add_label_cs,
        }
    }

    /// Title of the add-record dialog for the selected type, if any
    pub(crate) fn dialog_title(self, selected: Option<RecordType>) -> &'static str {
        match (selected, self) {
            (Some(t), _) => self.add_label(t),
            (None, Locale::En) => "Add record",
            (None, Locale::Cs) => "Přidat záznam",
        }
    }

    pub(crate) fn timeline_heading(self) -> &'static str {
        match self {
            Locale::En => "Timeline",
            Locale::Cs => "Časová osa",
        }
    }

    pub(crate) fn empty_message(self) -> &'static str {
        match self {
            Locale::En => "No records yet. Start by adding your first event.",
            Locale::Cs => "Zatím nemáte žádné záznamy. Začněte přidáním své první události.",
        }
    }
}

pub(super) fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Primary => Color::Blue,
        Tone::Accent => Color::Magenta,
        Tone::Success => Color::Green,
        Tone::Muted => Color::Grey,
    }
}

pub(super) fn styled_cell(text: &str, color: Option<Color>, bold: bool) -> Cell {
    let mut cell = Cell::new(text);
    if let Some(c) = color {
        cell = cell.fg(c);
    }
    if bold {
        cell = cell.add_attribute(Attribute::Bold);
    }
    cell
}

pub(super) fn header_cell(text: &str, use_color: bool) -> Cell {
    let mut cell = Cell::new(text).add_attribute(Attribute::Bold);
    if use_color {
        cell = cell.fg(Color::Cyan);
    }
    cell
}

/// Badge cell for a record type: icon plus localized label, tinted by tone
pub(super) fn type_cell(record_type: RecordType, locale: Locale, use_color: bool) -> Cell {
    let meta = record_type.meta();
    let text = format!("{} {}", meta.icon, locale.type_label(record_type));
    styled_cell(&text, use_color.then(|| tone_color(meta.tone)), false)
}

/// Replace the double-line header separator (╞═╪═╡) with single-line (├─┼─┤)
fn normalize_header_separator(table: &mut Table) {
    table.set_style(TableComponent::HeaderLines, '─');
    table.set_style(TableComponent::LeftHeaderIntersection, '├');
    table.set_style(TableComponent::MiddleHeaderIntersections, '┼');
    table.set_style(TableComponent::RightHeaderIntersection, '┤');
}

/// Create a table with the standard preset, inner borders, and normalized header separator.
pub(super) fn create_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    normalize_header_separator(&mut table);
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_locale_none_and_empty_default_to_english() {
        assert_eq!(Locale::from_locale(None).unwrap(), Locale::En);
        assert_eq!(Locale::from_locale(Some("  ")).unwrap(), Locale::En);
    }

    #[test]
    fn from_locale_with_region_suffix() {
        assert_eq!(Locale::from_locale(Some("cs-CZ")).unwrap(), Locale::Cs);
        assert_eq!(Locale::from_locale(Some("en_GB")).unwrap(), Locale::En);
    }

    #[test]
    fn from_locale_unsupported_returns_error() {
        let err = Locale::from_locale(Some("ja")).unwrap_err();
        assert_eq!(err.to_string(), "Unsupported locale: ja");
    }

    #[test]
    fn month_names_are_one_indexed() {
        assert_eq!(Locale::En.month_name(1), "January");
        assert_eq!(Locale::Cs.month_name(3), "Březen");
        assert_eq!(Locale::Cs.month_name(12), "Prosinec");
        assert_eq!(Locale::En.month_name(0), "?");
        assert_eq!(Locale::En.month_name(13), "?");
    }

    #[test]
    fn bucket_label_joins_month_and_year() {
        assert_eq!(Locale::En.bucket_label(2024, 4), "April 2024");
        assert_eq!(Locale::Cs.bucket_label(2024, 4), "Duben 2024");
    }

    #[test]
    fn format_date_per_locale() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(Locale::En.format_date(d), "March 15, 2024");
        assert_eq!(Locale::Cs.format_date(d), "15. března 2024");
    }

    #[test]
    fn dialog_title_falls_back_without_type() {
        assert_eq!(Locale::En.dialog_title(None), "Add record");
        assert_eq!(
            Locale::Cs.dialog_title(Some(RecordType::Medication)),
            "Přidat lék"
        );
    }

    #[test]
    fn type_labels_cover_every_type() {
        for t in RecordType::ALL {
            assert!(!Locale::En.type_label(t).is_empty());
            assert!(!Locale::Cs.type_label(t).is_empty());
        }
    }
}
