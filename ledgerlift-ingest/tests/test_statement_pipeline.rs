use ledgerlift_ingest::{ScanOptions, collect_transaction_pages, finalize, parse_statement_text};
use ledgerlift_rules::RuleSet;
use std::path::PathBuf;

fn workspace_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .to_path_buf()
}

fn fixture_pages() -> Vec<String> {
    let text = std::fs::read_to_string(workspace_root().join("sample_statement.txt"))
        .expect("sample_statement.txt at workspace root");
    text.split('\u{0c}').map(str::to_string).collect()
}

fn fixture_rules() -> RuleSet {
    RuleSet::load(workspace_root().join("rules.json")).expect("rules.json should compile")
}

#[test]
fn test_full_statement_to_records() {
    let opts = ScanOptions::default();
    let pages = fixture_pages();
    assert_eq!(pages.len(), 3, "fixture is three form-feed separated pages");

    let text = collect_transaction_pages(&pages, &opts).expect("fixture has transaction pages");
    // the middle page carries no transaction section
    assert!(!text.contains("Important information"));

    let drafts = parse_statement_text(&text, &opts).unwrap();
    let records = finalize(drafts, &fixture_rules()).unwrap();

    assert_eq!(records.len(), 5);

    // document order, all dates in ISO form
    let dates: Vec<&str> = records.iter().map(|r| r.date.as_str()).collect();
    assert_eq!(
        dates,
        ["2024-01-01", "2024-01-02", "2024-01-03", "2024-01-15", "2024-01-28"]
    );

    let woolworths = &records[0];
    assert_eq!(woolworths.details, "EFTPOS WOOLWORTHS 1234");
    assert_eq!(woolworths.amount, -45.67);
    assert_eq!(woolworths.category, "Groceries");
    assert_eq!(woolworths.kind, "Not Fixed");

    let salary = &records[1];
    assert_eq!(salary.details, "DIRECT CREDIT SALARY ACME PTY LTD");
    assert_eq!(salary.amount, 1850.0);
    assert_eq!(salary.category, "Salary");
    assert_eq!(salary.kind, "Income");

    // card reference and value date stripped by post-processing
    let netflix = &records[2];
    assert_eq!(netflix.details, "POS AUTHORISATION NETFLIX.COM");
    assert_eq!(netflix.amount, -15.99);
    assert_eq!(netflix.category, "Entertainment");

    let atm = &records[3];
    assert_eq!(atm.details, "ATM WITHDRAWAL CITY BRANCH");
    assert_eq!(atm.category, "Cash");

    // wrapped description merged, stray balance figure on the
    // continuation line dropped
    let transfer = &records[4];
    assert_eq!(transfer.details, "TRANSFER TO SAVINGS ACCT REF 998877");
    assert_eq!(transfer.amount, -200.0);
    assert_eq!(transfer.category, "Savings");
}

#[test]
fn test_every_record_is_categorized() {
    let opts = ScanOptions::default();
    let text = collect_transaction_pages(&fixture_pages(), &opts).unwrap();
    let drafts = parse_statement_text(&text, &opts).unwrap();

    // even with no rules at all, defaults fill category and type
    let records = finalize(drafts, &RuleSet::default()).unwrap();
    for r in &records {
        assert!(!r.category.is_empty());
        assert!(!r.kind.is_empty());
        if r.is_income() {
            assert_eq!(r.category, "Income");
        } else {
            assert_eq!(r.category, "Other Expense");
        }
    }
}

#[test]
fn test_single_line_statement_end_to_end() {
    let opts = ScanOptions::default();
    let pages =
        vec!["Transaction details\n01 Jan 2024 GROCERY STORE PURCHASE $45.67-".to_string()];

    let text = collect_transaction_pages(&pages, &opts).unwrap();
    let drafts = parse_statement_text(&text, &opts).unwrap();
    let records = finalize(drafts, &RuleSet::default()).unwrap();

    assert_eq!(records.len(), 1);
    let r = &records[0];
    assert_eq!(r.date, "2024-01-01");
    assert_eq!(r.details, "GROCERY STORE PURCHASE");
    assert_eq!(r.amount, -45.67);
    assert_eq!(r.category, "Other Expense");
    assert_eq!(r.kind, "Not Fixed");
}

#[test]
fn test_statement_without_data_pages_yields_nothing() {
    let opts = ScanOptions::default();
    let pages = vec!["Interest rate change notice".to_string()];
    assert!(collect_transaction_pages(&pages, &opts).is_none());
}
