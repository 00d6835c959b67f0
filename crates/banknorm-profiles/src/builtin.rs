//! Built-in bank layouts.

use banknorm_model::{DecimalConvention, HeaderRule, LayoutProfile, RoleAliases};

/// Timestamp format of spreadsheet date cells and of Revolut exports.
const ISO_DATETIME: &str = "%Y-%m-%d %H:%M:%S";
const ISO_DATE: &str = "%Y-%m-%d";

const DAY_FIRST_DATES: [&str; 5] = ["%d/%m/%Y", "%d-%m-%Y", "%d.%m.%Y", ISO_DATETIME, ISO_DATE];

/// Built-in profiles in auto-detection order, most specific first.
pub fn builtin_profiles() -> Vec<LayoutProfile> {
    vec![bankinter(), ingdirect(), revolut(), generic()]
}

/// Bankinter spreadsheet export: three lines of account preamble.
pub fn bankinter() -> LayoutProfile {
    LayoutProfile::new(
        "bankinter",
        HeaderRule::FixedOffset { skip: 3 },
        RoleAliases::new(
            &["fecha contable", "fecha"],
            &["descripción", "descripcion", "concepto"],
            &["importe"],
        ),
    )
    .with_description("Bankinter account movements (xls)")
    .with_decimal(DecimalConvention::Comma)
    .with_date_formats(&DAY_FIRST_DATES)
}

/// ING Direct spreadsheet export: dates under `F. VALOR`, amounts under
/// `IMPORTE (€)`.
pub fn ingdirect() -> LayoutProfile {
    LayoutProfile::new(
        "ingdirect",
        HeaderRule::FixedOffset { skip: 3 },
        RoleAliases::new(
            &["f. valor", "fecha valor", "fecha"],
            &["descripción", "descripcion"],
            &["importe"],
        ),
    )
    .with_description("ING Direct account movements (xls)")
    .with_decimal(DecimalConvention::Comma)
    .with_date_formats(&["%d/%m/%Y", ISO_DATETIME, ISO_DATE])
}

pub fn revolut() -> LayoutProfile {
    LayoutProfile::new(
        "revolut",
        HeaderRule::Markers {
            tokens: vec!["started date".to_string()],
        },
        RoleAliases::new(&["started date"], &["description"], &["amount"]),
    )
    .with_description("Revolut account statement (csv)")
    .with_decimal(DecimalConvention::Dot)
    .with_date_formats(&[ISO_DATETIME, ISO_DATE])
}

/// Fallback for plain exports with English or Spanish column names.
pub fn generic() -> LayoutProfile {
    LayoutProfile::new(
        "generic",
        HeaderRule::default(),
        RoleAliases::new(
            &["date", "fecha"],
            &["payee", "description", "descripción", "concepto"],
            &["amount", "importe"],
        ),
    )
    .with_description("Any export with a Date/Payee/Amount header row")
    .with_decimal(DecimalConvention::Dot)
    .with_date_formats(&DAY_FIRST_DATES)
}
