//! Basic usage example for relayout-engine

use relayout_engine::{Document, RelocationPlan, Relocator};

fn main() -> relayout_engine::Result<()> {
    // A small dashboard layout with a sidebar block to relocate.
    let source = r#"<Dashboard>
  {/* sidebar */}
  <Panel kind="side">
    <Nav />
  </Panel>
  <Feed />
  {/* footer */}
  <Footer />
</Dashboard>
"#;

    let plan = RelocationPlan::from_toml_str(
        r#"
lookahead_floor = 1
lead_in = ["", "  {/* moved sidebar */}", "  <Section>"]
block_start = { match = "contains", pattern = "{/* sidebar */}" }
block_end = { match = "exact", pattern = "  </Panel>" }
anchor = { match = "contains", pattern = "{/* footer */}" }

[wrapper]
strip_open = { match = "contains", pattern = "<Panel kind=\"side\">" }
strip_close = { match = "exact", pattern = "  </Panel>" }
append = ["  </Section>", ""]
"#,
    )?;

    let mut doc = Document::parse(source);
    let relocator = Relocator::new(plan)?;
    let report = relocator.run(&mut doc)?;

    println!(
        "Moved block from line {} to line {}",
        report.moved_from, report.moved_to
    );
    println!(
        "Removed {} lines, inserted {}, net change {:+}",
        report.lines_removed,
        report.lines_inserted,
        report.net_line_change()
    );
    for outcome in std::iter::once(&report.wrapper).chain(&report.relabel) {
        println!("  {:?}: {}", outcome.status, outcome.step);
    }

    println!("\nTransformed document:\n{}", doc.render());

    Ok(())
}
