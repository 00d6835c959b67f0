//! End-to-end conversion tests over in-memory rows.

use proptest::prelude::*;

use banknorm_core::{ConvertError, FatalKind, convert, convert_auto, detect_profile};
use banknorm_ingest::number_text;
use banknorm_model::{
    CellValue, DecimalConvention, HeaderRule, LayoutProfile, RawRow, Role, RoleAliases,
    SkipReason,
};
use banknorm_profiles::ProfileRegistry;

fn rows(data: &[&[&str]]) -> Vec<RawRow> {
    data.iter()
        .enumerate()
        .map(|(idx, cells)| RawRow::from_strs(idx + 1, cells))
        .collect()
}

fn english(decimal: DecimalConvention) -> LayoutProfile {
    LayoutProfile::new(
        "english",
        HeaderRule::MinNonEmpty { cells: 3 },
        RoleAliases::new(&["date"], &["description", "payee"], &["amount"]),
    )
    .with_decimal(decimal)
    .with_date_formats(&["%d/%m/%Y"])
}

#[test]
fn header_found_after_noise() {
    let input = rows(&[
        &[],
        &["junk"],
        &["Date", "Description", "Amount"],
        &["01/02/2024", "Shop", "10,00"],
    ]);
    let conversion = convert(&input, &english(DecimalConvention::Comma)).expect("converted");

    assert_eq!(conversion.header_index, 2);
    assert_eq!(conversion.header_line, 3);
    assert_eq!(conversion.records.len(), 1);
    let record = &conversion.records[0];
    assert_eq!(record.date_text(), "01/02/2024");
    assert_eq!(record.payee, "Shop");
    assert_eq!(record.notes, "");
    assert_eq!(record.amount_text(), "10");
}

#[test]
fn missing_payee_column_is_fatal() {
    let input = rows(&[&["Date", "Amount", "Balance"], &["01/02/2024", "10", "20"]]);
    let err = convert(&input, &english(DecimalConvention::Dot)).unwrap_err();
    assert_eq!(err.kind(), FatalKind::MissingColumn);
    match err {
        ConvertError::Mapping(banknorm_map::MappingError::MissingColumn { roles }) => {
            assert_eq!(roles, vec![Role::Payee]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn short_document_has_no_header() {
    let profile = english(DecimalConvention::Dot);
    let profile = LayoutProfile {
        header: HeaderRule::FixedOffset { skip: 3 },
        ..profile
    };
    let err = convert(&rows(&[&["a"], &["b"]]), &profile).unwrap_err();
    assert_eq!(err.kind(), FatalKind::HeaderNotFound);
}

#[test]
fn bad_rows_do_not_stop_later_rows() {
    let input = rows(&[
        &["Date", "Payee", "Amount"],
        &["01/01/2024", "Rent", "-800.00"],
        &["not a date", "Cafe", "-3.20"],
        &["03/01/2024", "Salary", "2,500.5"],
        &["04/01/2024", "Refund", ""],
        &["05/01/2024", "Bonus", "lots"],
        &["", "Orphan", "1"],
    ]);
    let conversion = convert(&input, &english(DecimalConvention::Dot)).expect("converted");

    let amounts: Vec<String> = conversion.records.iter().map(|r| r.amount_text()).collect();
    assert_eq!(amounts, ["-800", "2500.50"]);

    let skipped: Vec<(usize, SkipReason)> = conversion
        .skipped
        .iter()
        .map(|s| (s.line, s.reason.clone()))
        .collect();
    assert_eq!(
        skipped,
        vec![
            (
                3,
                SkipReason::UnparsableDate {
                    value: "not a date".to_string()
                }
            ),
            (5, SkipReason::MissingAmount),
            (
                6,
                SkipReason::UnparsableAmount {
                    value: "lots".to_string()
                }
            ),
            (7, SkipReason::MissingDate),
        ]
    );
    assert_eq!(conversion.skipped[0].to_string(), "row 3: unparsable date 'not a date'");
}

#[test]
fn zero_records_is_still_a_conversion() {
    let input = rows(&[&["Date", "Payee", "Amount"]]);
    let conversion = convert(&input, &english(DecimalConvention::Dot)).expect("converted");
    assert!(conversion.records.is_empty());
    assert!(conversion.skipped.is_empty());
}

#[test]
fn detects_revolut_export() {
    let input = rows(&[
        &[
            "Type",
            "Product",
            "Started Date",
            "Completed Date",
            "Description",
            "Amount",
            "Fee",
            "Currency",
            "State",
            "Balance",
        ],
        &[
            "CARD_PAYMENT",
            "Current",
            "2024-10-07 19:33:24",
            "2024-10-08 10:00:00",
            "Mercadona",
            "-23.45",
            "0.00",
            "EUR",
            "COMPLETED",
            "100.00",
        ],
        &[
            "TOPUP",
            "Current",
            "2024-10-09 08:00:00",
            "2024-10-09 08:00:01",
            "Top-Up by *1234",
            "50.00",
            "0.00",
            "EUR",
            "COMPLETED",
            "150.00",
        ],
        &[
            "TRANSFER",
            "Current",
            "2024-10-10 12:00:00",
            "2024-10-10 12:00:00",
            "To John/Doe, Ltd",
            "-1000.00",
            "0.00",
            "EUR",
            "COMPLETED",
            "-850.00",
        ],
    ]);
    let registry = ProfileRegistry::builtin();
    let profile = detect_profile(&input, registry.as_slice()).expect("detected");
    assert_eq!(profile.name, "revolut");

    let conversion = convert_auto(&input, registry.as_slice()).expect("converted");
    let rendered: Vec<(String, String, String)> = conversion
        .records
        .iter()
        .map(|r| (r.date_text(), r.payee.clone(), r.amount_text()))
        .collect();
    assert_eq!(
        rendered,
        vec![
            ("07/10/2024".into(), "Mercadona".into(), "-23.45".into()),
            ("09/10/2024".into(), "Top-Up by *1234".into(), "50".into()),
            ("10/10/2024".into(), "To JohnDoe Ltd".into(), "-1000".into()),
        ]
    );
}

#[test]
fn detects_bankinter_spreadsheet_layout() {
    let mut input = rows(&[
        &["Movimientos de la cuenta"],
        &[],
        &["ES12 0128 0000 0000 0000 0000"],
        &["FECHA CONTABLE", "FECHA VALOR", "DESCRIPCIÓN", "IMPORTE", "SALDO"],
        &["02/01/2024", "02/01/2024", "RECIBO LUZ", "-45,30", "1.200,00"],
    ]);
    input.push(RawRow::new(
        6,
        vec![
            "2024-01-03 00:00:00".into(),
            "2024-01-03 00:00:00".into(),
            "NOMINA".into(),
            CellValue::Number(1500.0),
            CellValue::Number(2700.0),
        ],
    ));

    let registry = ProfileRegistry::builtin();
    let conversion = convert_auto(&input, registry.as_slice()).expect("converted");
    assert_eq!(conversion.profile, "bankinter");
    assert_eq!(conversion.header_line, 4);
    let amounts: Vec<String> = conversion.records.iter().map(|r| r.amount_text()).collect();
    assert_eq!(amounts, ["-45.30", "1500"]);
    assert_eq!(conversion.records[1].date_text(), "03/01/2024");
}

#[test]
fn detects_ingdirect_spreadsheet_layout() {
    let mut input = rows(&[
        &["Número de cuenta:", "ES76 1465 0100 0000 0000 0000"],
        &["Titular:", "ANA GARCÍA"],
        &["Fecha exportación:", "05/02/2024"],
        &[
            "F. VALOR",
            "CATEGORÍA",
            "SUBCATEGORÍA",
            "DESCRIPCIÓN",
            "COMENTARIO",
            "IMAGEN",
            "IMPORTE (€)",
            "SALDO (€)",
        ],
    ]);
    input.push(RawRow::new(
        5,
        vec![
            "2024-02-01 00:00:00".into(),
            "Alimentación".into(),
            "Supermercados".into(),
            "MERCADONA".into(),
            CellValue::Empty,
            CellValue::Empty,
            CellValue::Number(-12.5),
            CellValue::Number(987.5),
        ],
    ));
    input.push(RawRow::new(
        6,
        vec![
            "03/02/2024".into(),
            "Nómina".into(),
            CellValue::Empty,
            "TRANSFERENCIA RECIBIDA".into(),
            CellValue::Empty,
            CellValue::Empty,
            "2.000,00".into(),
            "2.987,50".into(),
        ],
    ));

    let registry = ProfileRegistry::builtin();
    let profile = detect_profile(&input, registry.as_slice()).expect("detected");
    assert_eq!(profile.name, "ingdirect");

    let conversion = convert_auto(&input, registry.as_slice()).expect("converted");
    assert_eq!(conversion.header_line, 4);
    let rendered: Vec<(String, String, String)> = conversion
        .records
        .iter()
        .map(|r| (r.date_text(), r.payee.clone(), r.amount_text()))
        .collect();
    assert_eq!(
        rendered,
        vec![
            ("01/02/2024".into(), "MERCADONA".into(), "-12.50".into()),
            ("03/02/2024".into(), "TRANSFERENCIA RECIBIDA".into(), "2000".into()),
        ]
    );
}

#[test]
fn numbers_loaded_as_text_keep_their_value_under_comma_profiles() {
    let mut input = rows(&[
        &["Movimientos de la cuenta"],
        &[],
        &[],
        &["FECHA CONTABLE", "FECHA VALOR", "DESCRIPCIÓN", "IMPORTE", "SALDO"],
    ]);
    for (line, amount) in [(5, -45.3), (6, 1234.5), (7, 20.0)] {
        input.push(RawRow::new(
            line,
            vec![
                "02/01/2024".into(),
                "02/01/2024".into(),
                "RECIBO".into(),
                CellValue::text(number_text(amount, DecimalConvention::Comma)),
                CellValue::Empty,
            ],
        ));
    }

    let registry = ProfileRegistry::builtin();
    let bankinter = registry.get("bankinter").expect("builtin");
    let conversion = convert(&input, bankinter).expect("converted");
    let amounts: Vec<String> = conversion.records.iter().map(|r| r.amount_text()).collect();
    assert_eq!(amounts, ["-45.30", "1234.50", "20"]);
    assert!(conversion.skipped.is_empty());
}

#[test]
fn falls_back_to_generic_then_gives_up() {
    let input = rows(&[
        &["Statement"],
        &["Date", "Payee", "Amount"],
        &["15/03/2024", "Gym", "-30"],
    ]);
    let registry = ProfileRegistry::builtin();
    let conversion = convert_auto(&input, registry.as_slice()).expect("converted");
    assert_eq!(conversion.profile, "generic");
    assert_eq!(conversion.records.len(), 1);

    let unknown = rows(&[&["Col A", "Col B", "Col C"], &["1", "2", "3"]]);
    let err = convert_auto(&unknown, registry.as_slice()).unwrap_err();
    assert_eq!(err.kind(), FatalKind::NoMatchingProfile);
}

#[derive(Debug, Clone)]
enum DataRow {
    Valid,
    BadDate,
    NoDate,
    BadAmount,
    NoAmount,
    Blank,
}

impl DataRow {
    fn cells(&self) -> Vec<&'static str> {
        match self {
            Self::Valid => vec!["01/02/2024", "Shop", "1,50"],
            Self::BadDate => vec!["32/13/2024", "Shop", "1,50"],
            Self::NoDate => vec!["", "Shop", "1,50"],
            Self::BadAmount => vec!["01/02/2024", "Shop", "1,5,0,x"],
            Self::NoAmount => vec!["01/02/2024", "Shop"],
            Self::Blank => vec!["", " ", ""],
        }
    }
}

fn data_row() -> impl Strategy<Value = DataRow> {
    prop_oneof![
        Just(DataRow::Valid),
        Just(DataRow::BadDate),
        Just(DataRow::NoDate),
        Just(DataRow::BadAmount),
        Just(DataRow::NoAmount),
        Just(DataRow::Blank),
    ]
}

proptest! {
    #[test]
    fn every_non_blank_row_is_accounted_for(data in prop::collection::vec(data_row(), 0..40)) {
        let mut input = vec![RawRow::from_strs(1, &["Date", "Payee", "Amount"])];
        for (idx, row) in data.iter().enumerate() {
            input.push(RawRow::from_strs(idx + 2, &row.cells()));
        }
        let conversion = convert(&input, &english(DecimalConvention::Comma)).unwrap();

        let non_blank = data.iter().filter(|row| !matches!(row, DataRow::Blank)).count();
        prop_assert_eq!(conversion.records.len() + conversion.skipped.len(), non_blank);

        let valid = data.iter().filter(|row| matches!(row, DataRow::Valid)).count();
        prop_assert_eq!(conversion.records.len(), valid);
        prop_assert!(conversion.skipped.windows(2).all(|w| w[0].line < w[1].line));
    }
}
