//! `tipease split`

use std::io::Write;

use serde_json::json;
use tipease_core::input::BillFields;
use tipease_core::types::TipSelection;

use crate::cli::SplitArgs;
use crate::error::CliResult;
use crate::render::render_split;

fn fields_from(args: &SplitArgs) -> BillFields {
    let tip = if args.custom_tip.is_some() {
        TipSelection::Custom
    } else {
        args.tip
    };

    BillFields {
        bill: args.bill.clone(),
        tip,
        custom_tip: args.custom_tip.clone().unwrap_or_default(),
        people: args.people.clone(),
    }
}

pub fn run<W: Write>(args: &SplitArgs, out: &mut W) -> CliResult<()> {
    let input = fields_from(args).to_input();
    let split = input.split();

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &json!({ "input": input, "split": split }))?;
        writeln!(out)?;
        return Ok(());
    }

    write!(out, "{}", render_split(&input, &split))?;
    if split.is_uneven {
        writeln!(
            out,
            "Run `tipease advise --tip-amount {:.2} --people {}` for a fair-split suggestion.",
            split.tip_amount.as_decimal(),
            input.people
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(bill: &str, tip: TipSelection, custom: Option<&str>, people: &str) -> SplitArgs {
        SplitArgs {
            bill: bill.to_string(),
            tip,
            custom_tip: custom.map(str::to_string),
            people: people.to_string(),
            json: false,
        }
    }

    fn run_to_string(args: &SplitArgs) -> String {
        let mut out = Vec::new();
        run(args, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_even_split() {
        let text = run_to_string(&args("50.00", TipSelection::Preset(15), None, "3"));
        assert!(text.contains("$7.50"));
        assert!(text.contains("$57.50"));
        assert!(text.contains("$19.17"));
        assert!(!text.contains("tipease advise"));
    }

    #[test]
    fn test_uneven_split_points_to_advise() {
        let text = run_to_string(&args("50.00", TipSelection::Preset(15), None, "4"));
        assert!(text.contains("tipease advise --tip-amount 7.50 --people 4"));
    }

    #[test]
    fn test_custom_tip_overrides_preset() {
        let text = run_to_string(&args("100", TipSelection::Preset(20), Some("18"), "1"));
        assert!(text.contains("Tip (18%):"));
        assert!(text.contains("$18.00"));
    }

    #[test]
    fn test_garbage_fields_are_normalized() {
        let text = run_to_string(&args("lunch", TipSelection::Preset(10), None, "-3"));
        assert!(text.contains("Total:"));
        assert!(text.contains("$0.00"));
        assert!(!text.contains("Each of"));
    }

    #[test]
    fn test_json_output() {
        let mut args = args("50.00", TipSelection::Preset(15), None, "4");
        args.json = true;
        let value: serde_json::Value = serde_json::from_str(&run_to_string(&args)).unwrap();

        assert_eq!(value["input"]["people"], 4);
        assert_eq!(value["split"]["tipAmount"], 750);
        assert_eq!(value["split"]["isUneven"], true);
    }
}
