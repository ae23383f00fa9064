//! Tests for the line-tagging pass and marker resolution

use relayout_engine::locate::{self, TagKind};
use relayout_engine::{Document, Error, Matcher, RelocationPlan, WrapperSwap};

fn doc(parts: &[&str]) -> Document {
    let mut source = parts.join("\n");
    source.push('\n');
    Document::parse(&source)
}

fn plan(floor: usize) -> RelocationPlan {
    RelocationPlan {
        block_start: Matcher::Contains("{/* right column */}".to_string()),
        block_end: Matcher::Exact("      </Panel>".to_string()),
        lookahead_floor: floor,
        anchor: Matcher::Contains("{/* tail sections */}".to_string()),
        lead_in: Vec::new(),
        wrapper: WrapperSwap {
            strip_open: Matcher::Contains("<Panel kind=\"right\">".to_string()),
            strip_close: Matcher::Exact("      </Panel>".to_string()),
            append: Vec::new(),
        },
        relabel: Vec::new(),
    }
}

fn tag(tags: &[locate::LineTag], kind: TagKind) -> Option<usize> {
    tags.iter().find(|t| t.kind == kind).map(|t| t.index)
}

#[test]
fn test_tag_lines_yields_one_tag_per_kind() {
    let d = doc(&[
        "top",
        "      {/* right column */}",
        "        cell",
        "        cell",
        "      </Panel>",
        "      {/* tail sections */}",
    ]);
    let tags = locate::tag_lines(&d, &plan(2));

    assert_eq!(tags.len(), 3);
    assert_eq!(tag(&tags, TagKind::BlockStart), Some(1));
    assert_eq!(tag(&tags, TagKind::BlockEnd), Some(4));
    assert_eq!(tag(&tags, TagKind::InsertAnchor), Some(5));
}

#[test]
fn test_lookahead_floor_skips_a_nearby_close() {
    // Two exact closes; the floor decides which one terminates the block.
    let d = doc(&[
        "      {/* right column */}",
        "        cell",
        "      </Panel>",
        "        cell",
        "        cell",
        "      </Panel>",
        "      {/* tail sections */}",
    ]);

    let near = locate::tag_lines(&d, &plan(0));
    assert_eq!(tag(&near, TagKind::BlockEnd), Some(2));

    let far = locate::tag_lines(&d, &plan(3));
    assert_eq!(tag(&far, TagKind::BlockEnd), Some(5));
}

#[test]
fn test_close_at_the_floor_itself_is_rejected() {
    // The end is sought strictly beyond start + floor.
    let d = doc(&[
        "      {/* right column */}",
        "        cell",
        "      </Panel>",
        "      </Panel>",
    ]);
    let tags = locate::tag_lines(&d, &plan(2));

    assert_eq!(tag(&tags, TagKind::BlockEnd), Some(3));
}

#[test]
fn test_block_end_is_not_sought_without_a_start() {
    let d = doc(&["no start here", "      </Panel>", "      {/* tail sections */}"]);
    let tags = locate::tag_lines(&d, &plan(0));

    assert_eq!(tag(&tags, TagKind::BlockStart), None);
    assert_eq!(tag(&tags, TagKind::BlockEnd), None);
    assert_eq!(tag(&tags, TagKind::InsertAnchor), Some(2));
}

#[test]
fn test_anchor_is_scanned_independently_of_the_block() {
    // The anchor sits before the block start and is still found.
    let d = doc(&[
        "      {/* tail sections */}",
        "      {/* right column */}",
        "        cell",
        "      </Panel>",
    ]);
    let tags = locate::tag_lines(&d, &plan(1));

    assert_eq!(tag(&tags, TagKind::InsertAnchor), Some(0));
    assert_eq!(tag(&tags, TagKind::BlockStart), Some(1));
}

#[test]
fn test_first_match_wins_for_duplicate_markers() {
    let d = doc(&[
        "      {/* right column */}",
        "      {/* right column */}",
        "        cell",
        "      </Panel>",
        "      {/* tail sections */}",
        "      {/* tail sections */}",
    ]);
    let tags = locate::tag_lines(&d, &plan(1));

    assert_eq!(tag(&tags, TagKind::BlockStart), Some(0));
    assert_eq!(tag(&tags, TagKind::InsertAnchor), Some(4));
}

#[test]
fn test_locate_returns_an_exclusive_end() {
    let d = doc(&[
        "      {/* right column */}",
        "        cell",
        "      </Panel>",
        "      {/* tail sections */}",
    ]);
    let located = locate::locate(&d, &plan(1)).unwrap();

    assert_eq!(located.block.start, 0);
    assert_eq!(located.block.end, 3);
    assert_eq!(located.block.len(), 3);
    assert_eq!(located.anchor, 3);
}

#[test]
fn test_missing_end_marker_reports_which_lookups_resolved() {
    let d = doc(&[
        "      {/* right column */}",
        "        cell",
        "      {/* tail sections */}",
    ]);
    let err = locate::locate(&d, &plan(1)).unwrap_err();

    match err {
        Error::MarkersMissing { start, end, anchor } => {
            assert_eq!(start, Some(0));
            assert_eq!(end, None);
            assert_eq!(anchor, Some(2));
        }
        other => panic!("expected MarkersMissing, got {other:?}"),
    }
}

#[test]
fn test_missing_marker_diagnostic_names_all_three_lookups() {
    let d = doc(&["      {/* right column */}", "        cell"]);
    let err = locate::locate(&d, &plan(1)).unwrap_err();
    let message = err.to_string();

    assert!(message.contains("could not find blocks"));
    assert!(message.contains("block_start: Some(0)"));
    assert!(message.contains("block_end: None"));
    assert!(message.contains("insert_anchor: None"));
}

#[test]
fn test_empty_document_resolves_nothing() {
    let d = Document::parse("");
    let err = locate::locate(&d, &plan(0)).unwrap_err();

    assert!(matches!(
        err,
        Error::MarkersMissing {
            start: None,
            end: None,
            anchor: None,
        }
    ));
}

#[test]
fn test_anchor_inside_the_block_is_rejected() {
    let d = doc(&[
        "      {/* right column */}",
        "        {/* tail sections */}",
        "        cell",
        "      </Panel>",
    ]);
    let err = locate::locate(&d, &plan(1)).unwrap_err();

    match err {
        Error::AnchorInsideBlock { anchor, start, end } => {
            assert_eq!(anchor, 1);
            assert_eq!(start, 0);
            assert_eq!(end, 4);
        }
        other => panic!("expected AnchorInsideBlock, got {other:?}"),
    }
}
