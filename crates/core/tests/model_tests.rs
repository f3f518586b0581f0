// ═══════════════════════════════════════════════════════════════════
// Model Tests — wire formats, derived values, SortState, Settings
// ═══════════════════════════════════════════════════════════════════

use tax_harvesting_core::errors::CoreError;
use tax_harvesting_core::models::capital_gains::{
    CapitalGainsCategory, CapitalGainsResponse, CapitalGainsSnapshot,
};
use tax_harvesting_core::models::dashboard::LoadState;
use tax_harvesting_core::models::harvest::HarvestResult;
use tax_harvesting_core::models::holding::{dedup_by_id, Balance, GainFigure, Holding};
use tax_harvesting_core::models::selection::SelectionSet;
use tax_harvesting_core::models::settings::{Settings, DEFAULT_PREVIEW_ROWS, DEFAULT_SELECTION_KEY};
use tax_harvesting_core::models::table::SortState;

const HOLDING_JSON: &str = r#"{
    "coin": "BTC",
    "coinName": "Bitcoin",
    "logo": "https://example.com/btc.png",
    "currentPrice": 85000.5,
    "totalHolding": 0.5,
    "averageBuyPrice": 60000,
    "stcg": { "balance": 0.25, "gain": -200.75 },
    "ltcg": { "balance": "N/A", "gain": 1500 }
}"#;

// ═══════════════════════════════════════════════════════════════════
// Holding & GainFigure
// ═══════════════════════════════════════════════════════════════════

mod holding {
    use super::*;

    #[test]
    fn parses_data_source_shape() {
        let h: Holding = serde_json::from_str(HOLDING_JSON).unwrap();
        assert_eq!(h.id, "BTC");
        assert_eq!(h.display_name, "Bitcoin");
        assert_eq!(h.icon_ref, "https://example.com/btc.png");
        assert_eq!(h.unit_price, 85000.5);
        assert_eq!(h.quantity_held, 0.5);
        assert_eq!(h.average_cost_basis, 60000.0);
        assert_eq!(h.short_term_gain.balance, Balance::Amount(0.25));
        assert_eq!(h.short_term_gain.gain, -200.75);
        assert_eq!(h.long_term_gain.balance, Balance::Label("N/A".into()));
        assert_eq!(h.long_term_gain.gain, 1500.0);
    }

    #[test]
    fn serializes_with_wire_names() {
        let h: Holding = serde_json::from_str(HOLDING_JSON).unwrap();
        let value = serde_json::to_value(&h).unwrap();
        assert_eq!(value["coin"], "BTC");
        assert_eq!(value["coinName"], "Bitcoin");
        assert_eq!(value["stcg"]["gain"], -200.75);
        assert_eq!(value["ltcg"]["balance"], "N/A");
        assert!(value.get("id").is_none());
    }

    #[test]
    fn missing_logo_and_balance_default() {
        let json = r#"{
            "coin": "ETH", "coinName": "Ethereum",
            "currentPrice": 1, "totalHolding": 2, "averageBuyPrice": 3,
            "stcg": { "gain": 0 }, "ltcg": { "gain": 0 }
        }"#;
        let h: Holding = serde_json::from_str(json).unwrap();
        assert_eq!(h.icon_ref, "");
        assert_eq!(h.short_term_gain.balance, Balance::Amount(0.0));
    }

    #[test]
    fn missing_gain_is_rejected() {
        let json = r#"{
            "coin": "ETH", "coinName": "Ethereum",
            "currentPrice": 1, "totalHolding": 2, "averageBuyPrice": 3,
            "stcg": { "balance": 1 }, "ltcg": { "gain": 0 }
        }"#;
        assert!(serde_json::from_str::<Holding>(json).is_err());
    }

    #[test]
    fn current_value_is_quantity_times_price() {
        let h = Holding::new("ETH", "Ethereum", 0.0, 0.0).with_position(2000.0, 1.5, 1800.0);
        assert_eq!(h.current_value(), 3000.0);
        assert_eq!(h.average_cost_basis, 1800.0);
    }

    #[test]
    fn gain_figure_profit_and_loss() {
        assert_eq!(GainFigure::of(12.5).profit(), Some(12.5));
        assert_eq!(GainFigure::of(12.5).loss(), None);
        assert_eq!(GainFigure::of(-7.0).profit(), None);
        assert_eq!(GainFigure::of(-7.0).loss(), Some(7.0));
        assert_eq!(GainFigure::of(0.0).profit(), None);
        assert_eq!(GainFigure::of(0.0).loss(), None);
    }

    #[test]
    fn balance_display() {
        assert_eq!(Balance::Amount(1.5).to_string(), "1.5");
        assert_eq!(Balance::Label("pending".into()).to_string(), "pending");
        let g = GainFigure::new(Balance::Label("x".into()), 3.0);
        assert_eq!(g.gain, 3.0);
    }

    #[test]
    fn dedup_keeps_first_occurrence_in_order() {
        let holdings = vec![
            Holding::new("A", "first A", 1.0, 0.0),
            Holding::new("B", "B", 2.0, 0.0),
            Holding::new("A", "second A", 3.0, 0.0),
            Holding::new("C", "C", 4.0, 0.0),
            Holding::new("B", "second B", 5.0, 0.0),
        ];
        let unique = dedup_by_id(&holdings);
        let names: Vec<&str> = unique.iter().map(|h| h.display_name.as_str()).collect();
        assert_eq!(names, vec!["first A", "B", "C"]);
    }
}

// ═══════════════════════════════════════════════════════════════════
// Capital gains
// ═══════════════════════════════════════════════════════════════════

mod capital_gains {
    use super::*;

    #[test]
    fn net_may_be_negative() {
        assert_eq!(CapitalGainsCategory::new(100.0, 40.0).net(), 60.0);
        assert_eq!(CapitalGainsCategory::new(10.0, 40.0).net(), -30.0);
    }

    #[test]
    fn realised_total_sums_both_categories() {
        let snap = CapitalGainsSnapshot::new(
            CapitalGainsCategory::new(100.0, 40.0),
            CapitalGainsCategory::new(10.0, 40.0),
        );
        assert_eq!(snap.realised_total(), 30.0);
        assert_eq!(CapitalGainsSnapshot::default().realised_total(), 0.0);
    }

    #[test]
    fn parses_response_envelope() {
        let json = r#"{
            "capitalGains": {
                "stcg": { "profits": 70200.88, "losses": 1548.53 },
                "ltcg": { "profits": 5020, "losses": 3050 }
            }
        }"#;
        let resp: CapitalGainsResponse = serde_json::from_str(json).unwrap();
        let cg = resp.capital_gains;
        assert_eq!(cg.short_term.profits, 70200.88);
        assert_eq!(cg.short_term.losses, 1548.53);
        assert_eq!(cg.long_term.profits, 5020.0);
        assert_eq!(cg.long_term.losses, 3050.0);
    }

    #[test]
    fn projected_mirrors_accumulators() {
        let r = HarvestResult {
            st_profits: 1.0,
            st_losses: 2.0,
            lt_profits: 3.0,
            lt_losses: 4.0,
            ..HarvestResult::default()
        };
        let p = r.projected();
        assert_eq!(p.short_term, CapitalGainsCategory::new(1.0, 2.0));
        assert_eq!(p.long_term, CapitalGainsCategory::new(3.0, 4.0));
    }
}

// ═══════════════════════════════════════════════════════════════════
// SelectionSet
// ═══════════════════════════════════════════════════════════════════

mod selection_set {
    use super::*;

    #[test]
    fn insert_and_remove_report_changes() {
        let mut s = SelectionSet::new();
        assert!(s.insert("BTC"));
        assert!(!s.insert("BTC"));
        assert!(s.remove("BTC"));
        assert!(!s.remove("BTC"));
        assert!(s.is_empty());
    }

    #[test]
    fn iter_is_sorted() {
        let s: SelectionSet = ["SOL", "BTC", "ETH"].into_iter().collect();
        assert_eq!(s.iter().collect::<Vec<_>>(), vec!["BTC", "ETH", "SOL"]);
    }

    #[test]
    fn serde_is_transparent_array() {
        let s: SelectionSet = serde_json::from_str(r#"["ETH","BTC"]"#).unwrap();
        assert_eq!(s.len(), 2);
        assert_eq!(serde_json::to_string(&s).unwrap(), r#"["BTC","ETH"]"#);
    }
}

// ═══════════════════════════════════════════════════════════════════
// SortState & LoadState
// ═══════════════════════════════════════════════════════════════════

mod states {
    use super::*;

    #[test]
    fn sort_advances_in_a_three_cycle() {
        assert_eq!(SortState::default(), SortState::Unsorted);
        assert_eq!(SortState::Unsorted.advance(), SortState::Ascending);
        assert_eq!(SortState::Ascending.advance(), SortState::Descending);
        assert_eq!(SortState::Descending.advance(), SortState::Unsorted);
        for s in [SortState::Unsorted, SortState::Ascending, SortState::Descending] {
            assert_eq!(s.advance().advance().advance(), s);
        }
    }

    #[test]
    fn sort_is_active() {
        assert!(!SortState::Unsorted.is_active());
        assert!(SortState::Ascending.is_active());
        assert!(SortState::Descending.is_active());
        assert_eq!(SortState::Descending.to_string(), "Descending");
    }

    #[test]
    fn load_state_accessors() {
        assert_eq!(LoadState::default(), LoadState::Idle);
        assert!(LoadState::Loading.is_loading());
        assert_eq!(LoadState::Ready.error(), None);
        assert_eq!(LoadState::Failed("boom".into()).error(), Some("boom"));
    }
}

// ═══════════════════════════════════════════════════════════════════
// Settings
// ═══════════════════════════════════════════════════════════════════

mod settings {
    use super::*;

    #[test]
    fn defaults() {
        let s = Settings::default();
        assert_eq!(s.selection_key, DEFAULT_SELECTION_KEY);
        assert_eq!(s.selection_key, "taxHarvestingSelections");
        assert_eq!(s.preview_rows, DEFAULT_PREVIEW_ROWS);
        assert_eq!(s.preview_rows, 5);
        assert_eq!(s.request_timeout_secs, 30);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let s = Settings::from_json(r#"{"api_base_url": "https://api.example.com/v1"}"#).unwrap();
        assert_eq!(s.api_base_url, "https://api.example.com/v1");
        assert_eq!(s.preview_rows, 5);
        assert_eq!(s.selection_key, DEFAULT_SELECTION_KEY);
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(Settings::from_json("{}").unwrap(), Settings::default());
    }

    #[test]
    fn zero_preview_rows_rejected() {
        let result = Settings::from_json(r#"{"preview_rows": 0}"#);
        assert!(matches!(result, Err(CoreError::InvalidSettings(_))));
    }

    #[test]
    fn zero_timeout_rejected() {
        let result = Settings::from_json(r#"{"request_timeout_secs": 0}"#);
        assert!(matches!(result, Err(CoreError::InvalidSettings(msg)) if msg.contains("request_timeout_secs")));

        let direct = Settings {
            request_timeout_secs: 0,
            ..Settings::default()
        };
        assert!(direct.validate().is_err());
        assert!(Settings::from_json(r#"{"request_timeout_secs": 1}"#).is_ok());
    }

    #[test]
    fn blank_key_rejected() {
        let result = Settings::from_json(r#"{"selection_key": "  "}"#);
        assert!(matches!(result, Err(CoreError::InvalidSettings(_))));
    }

    #[test]
    fn non_http_url_rejected() {
        let result = Settings::from_json(r#"{"api_base_url": "ftp://example.com"}"#);
        assert!(matches!(result, Err(CoreError::InvalidSettings(_))));
    }

    #[test]
    fn malformed_json_rejected() {
        let result = Settings::from_json("{");
        assert!(matches!(result, Err(CoreError::InvalidSettings(_))));
    }
}
