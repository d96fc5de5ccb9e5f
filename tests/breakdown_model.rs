use gratuity::prelude::*;
use rust_decimal_macros::dec;

#[test]
fn test_display_model_formatting() {
    let config = TipConfig::default(); // Defaults to EnUs, USD

    let breakdown = TipCalculator::new()
        .bill(dec!(50.00))
        .percent(dec!(15))
        .round_up(true)
        .label("Dinner")
        .compute_tip(&config)
        .unwrap();

    let display = breakdown.to_display(&config);

    assert_eq!(display.formatted_bill, "$50.00");
    assert_eq!(display.formatted_tip, "$8.00");
    assert_eq!(display.formatted_total, "$58.00");
    assert_eq!(display.currency_code, "USD");
    assert_eq!(display.status, "ROUNDED UP");
}

#[test]
fn test_display_model_exact_status() {
    let config = TipConfig::default();

    let breakdown = TipCalculator::new()
        .bill(dec!(50.00))
        .percent(dec!(15))
        .compute_tip(&config)
        .unwrap();
    let display = breakdown.to_display(&config);

    assert_eq!(display.formatted_tip, "$7.50");
    assert_eq!(display.status, "EXACT");
}

#[test]
fn test_total_is_bill_plus_tip() {
    let config = TipConfig::default();

    for (bill, percent, round_up) in [
        (dec!(50.00), dec!(15), false),
        (dec!(50.00), dec!(15), true),
        (dec!(0), dec!(20), true),
        (dec!(123.45), dec!(18.5), false),
    ] {
        let res = TipCalculator::new()
            .bill(bill)
            .percent(percent)
            .round_up(round_up)
            .compute_tip(&config)
            .unwrap();
        assert_eq!(res.total_due, res.bill_amount + res.tip_due);
    }
}

#[test]
fn test_trace_contains_ceiling_step_only_when_rounding_changes() {
    let config = TipConfig::default();

    // 7.50 -> 8: a ceil step must appear
    let rounded = TipCalculator::new()
        .bill(dec!(50.00))
        .percent(dec!(15))
        .round_up(true)
        .compute_tip(&config)
        .unwrap();
    assert!(
        rounded
            .calculation_trace
            .iter()
            .any(|s| s.operation == "ceil")
    );

    // 8.00 is already whole: no ceil step
    let whole = TipCalculator::new()
        .bill(dec!(40.00))
        .percent(dec!(20))
        .round_up(true)
        .compute_tip(&config)
        .unwrap();
    assert!(
        !whole
            .calculation_trace
            .iter()
            .any(|s| s.operation == "ceil")
    );

    // Exact policy: never a ceil step
    let exact = TipCalculator::new()
        .bill(dec!(50.00))
        .percent(dec!(15))
        .compute_tip(&config)
        .unwrap();
    assert!(
        !exact
            .calculation_trace
            .iter()
            .any(|s| s.operation == "ceil")
    );
}

#[test]
fn test_explain_output() {
    let config = TipConfig::default();

    let breakdown = TipCalculator::new()
        .bill(dec!(50.00))
        .percent(dec!(15))
        .round_up(true)
        .label("Table 4")
        .compute_tip(&config)
        .unwrap();

    let explanation = breakdown.explain();
    assert!(explanation.contains("Table 4"));
    assert!(explanation.contains("Bill Amount"));
    assert!(explanation.contains("Tip Due"));
    assert!(explanation.contains("ROUND UP"));
}

#[test]
fn test_summary_and_labeling() {
    let config = TipConfig::default();

    let res = TipCalculator::new()
        .bill(dec!(50.00))
        .percent(dec!(15))
        .label("Lunch")
        .compute_tip(&config)
        .unwrap();

    assert_eq!(res.label, Some("Lunch".to_string()));
    assert_eq!(res.summary(), "Lunch: Exact - Tip: 7.50");
}

#[test]
fn test_locale_specific_display() {
    let de = TipConfig::new().with_locale(TipLocale::DeDe);
    let ja = TipConfig::new().with_locale(TipLocale::JaJp);

    let breakdown = TipCalculator::new()
        .bill(dec!(50.00))
        .percent(dec!(15))
        .compute_tip(&de)
        .unwrap();

    let display_de = breakdown.to_display(&de);
    assert_eq!(display_de.currency_code, "EUR");
    assert!(display_de.formatted_tip.contains("7,50"));
    assert!(display_de.formatted_tip.contains("€"));

    let display_ja = breakdown.to_display(&ja);
    assert_eq!(display_ja.currency_code, "JPY");
    // 7.50 rounds to whole yen
    assert_eq!(display_ja.formatted_tip, "¥8");
}

#[test]
fn test_breakdown_serializes() {
    let config = TipConfig::default();
    let breakdown = TipCalculator::new()
        .bill(dec!(50.00))
        .percent(dec!(15))
        .compute_tip(&config)
        .unwrap();

    let json = serde_json::to_string(&breakdown).unwrap();
    let back: TipBreakdown = serde_json::from_str(&json).unwrap();
    assert_eq!(back, breakdown);
}
