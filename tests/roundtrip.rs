use cssfilter::catalog::CATALOG;
use cssfilter::model::FilterValue;
use cssfilter::{FilterError, FilterList};

fn canonical_value(name: &str) -> &'static str {
    match name {
        "blur" => "2.5px",
        "brightness" => "150%",
        "contrast" => "80%",
        "saturate" => "200%",
        "grayscale" => "50%",
        "invert" => "100%",
        "opacity" => "25.5%",
        "sepia" => "0%",
        "hue-rotate" => "90deg",
        "drop-shadow" => "2px 2px 1px red",
        "url" => "example.svg#c1",
        other => panic!("no canonical value for {}", other),
    }
}

#[test]
fn every_kind_round_trips() {
    for def in CATALOG {
        let css = format!("{}({})", def.name, canonical_value(def.name));
        let list = FilterList::from_css(&css).unwrap();
        assert_eq!(list.to_css(), css, "round trip of {}", def.name);
    }
}

#[test]
fn all_kinds_together_round_trip() {
    let css = CATALOG
        .iter()
        .map(|def| format!("{}({})", def.name, canonical_value(def.name)))
        .collect::<Vec<_>>()
        .join(" ");
    assert_eq!(FilterList::from_css(&css).unwrap().to_css(), css);
}

#[test]
fn out_of_range_values_are_clamped() {
    let list = FilterList::from_css("grayscale(150%)").unwrap();
    let entry = list.at(0).unwrap();
    assert_eq!(entry.value(), &FilterValue::Number(100.0));
    assert_eq!(entry.unit(), "%");

    let list = FilterList::from_css("blur(-5px)").unwrap();
    assert_eq!(list.at(0).unwrap().value(), &FilterValue::Number(0.0));
    assert_eq!(list.to_css(), "blur(0px)");
}

#[test]
fn unitless_percentage_is_scaled() {
    let mut list = FilterList::new();
    let id = list.add("opacity", "0.5").unwrap();
    let entry = list.get(id).unwrap();
    assert_eq!(entry.value(), &FilterValue::Number(50.0));
    assert_eq!(entry.unit(), "%");
}

#[test]
fn none_and_empty_lists() {
    let list = FilterList::from_css("none").unwrap();
    assert!(list.is_empty());
    assert_eq!(list.to_css(), "none");
    assert!(matches!(
        FilterList::from_css(""),
        Err(FilterError::EmptyInput)
    ));
}

#[test]
fn move_keeps_positions_dense() {
    let css = "blur(1px) sepia(2%) invert(3%) contrast(4%) opacity(5%)";
    for from in 0..5 {
        for to in 0..5 {
            let mut list = FilterList::from_css(css).unwrap();
            let id = list.ids()[from];
            list.move_to(id, to).unwrap();

            assert_eq!(list.position(id), Some(to));
            let positions: Vec<usize> = list.entries().iter().map(|e| e.position).collect();
            assert_eq!(positions, (0..5).collect::<Vec<_>>());
        }
    }
}

#[test]
fn ids_are_never_reused() {
    let mut list = FilterList::from_css("blur(1px) sepia(2%)").unwrap();
    let removed = list.ids()[1];
    list.remove(removed).unwrap();
    let added = list.add("sepia", "2%").unwrap();
    assert!(added > removed);

    let kept = list.ids()[0];
    list.update(kept, "9px").unwrap();
    let entry = list.get(kept).unwrap();
    assert_eq!(entry.id(), kept);
    assert_eq!(entry.name(), "blur");
}

#[test]
fn end_to_end_mixed_kinds() {
    let list =
        FilterList::from_css("blur(30px) grayscale(200%) drop-shadow(2px 2px 1px red)").unwrap();
    let entries = list.entries();
    assert_eq!(entries.len(), 3);

    assert_eq!(entries[0].name, "blur");
    assert_eq!(entries[0].value, FilterValue::Number(30.0));
    assert_eq!(entries[0].unit, "px");

    assert_eq!(entries[1].name, "grayscale");
    assert_eq!(entries[1].value, FilterValue::Number(100.0));
    assert_eq!(entries[1].unit, "%");

    assert_eq!(entries[2].name, "drop-shadow");
    assert_eq!(entries[2].value, FilterValue::Text("2px 2px 1px red".into()));
    assert_eq!(entries[2].unit, "");

    assert_eq!(
        list.to_css(),
        "blur(30px) grayscale(100%) drop-shadow(2px 2px 1px red)"
    );
}
