//! End-to-end chart part scenarios.

use super::*;
use crate::common::error::Error;
use crate::common::id::AxisIds;

/// Axis ids of the reference scatter file with a secondary axis.
const SCATTER_Y2_IDS: AxisIds = AxisIds::new(40262272, 40260352, 40263296, 40264320);

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

#[test]
fn test_single_axis_line_chart() {
    let mut chart = Chart::new(ChartType::Line);
    chart.add_series(None, Some("Sheet1!$A$1:$A$5")).unwrap();
    chart.add_series(None, Some("Sheet1!$B$1:$B$5")).unwrap();

    let xml = chart.assemble_xml().unwrap();
    assert_eq!(count(&xml, "<c:lineChart>"), 1);
    assert_eq!(count(&xml, "<c:catAx>"), 1);
    assert_eq!(count(&xml, "<c:valAx>"), 1);
    assert!(xml.contains(r#"<c:tickLblPos val="nextTo"/>"#));
    assert!(!xml.contains(r#"<c:tickLblPos val="low"/>"#));
    assert!(!xml.contains(r#"<c:axPos val="r"/>"#));
    assert!(!xml.contains(r#"<c:crosses val="max"/>"#));

    for id in [50_010_002u32, 50_010_003] {
        assert!(!xml.contains(&format!(r#"val="{}""#, id)));
    }
}

#[test]
fn test_scatter_with_secondary_axis() {
    let mut chart = Chart::with_axis_ids(ChartType::Scatter, SCATTER_Y2_IDS);
    chart
        .add_series(Some("Sheet1!$A$1:$A$3"), Some("Sheet1!$B$1:$B$3"))
        .unwrap();
    chart
        .add_series_on_axis(
            Some("Sheet1!$A$1:$A$3"),
            Some("Sheet1!$C$1:$C$3"),
            AxisGroup::Secondary,
        )
        .unwrap();

    let xml = chart.assemble_xml().unwrap();
    assert_eq!(count(&xml, "<c:scatterChart>"), 2);
    assert_eq!(count(&xml, "<c:valAx>"), 4);
    assert!(xml.contains(r#"<c:axPos val="r"/>"#));
    assert!(xml.contains(r#"<c:crosses val="max"/>"#));
    assert!(xml.contains(r#"<c:tickLblPos val="high"/>"#));
    assert!(xml.contains(r#"<c:tickLblPos val="low"/>"#));

    // Each type group references its own axis pair.
    assert!(xml.contains(
        r#"<c:axId val="40262272"/><c:axId val="40260352"/></c:scatterChart><c:scatterChart>"#
    ));
    assert!(xml.contains(r#"<c:axId val="40263296"/><c:axId val="40264320"/></c:scatterChart>"#));
}

#[test]
fn test_secondary_value_axis_literals() {
    for chart_type in [
        ChartType::Area,
        ChartType::Bar,
        ChartType::Column,
        ChartType::Line,
        ChartType::RadarWithMarkers,
    ] {
        let mut chart = Chart::new(chart_type);
        chart.add_series(None, Some("Data!$B$2:$B$7")).unwrap();
        chart
            .add_series_on_axis(None, Some("Data!$C$2:$C$7"), AxisGroup::Secondary)
            .unwrap();

        let xml = chart.assemble_xml().unwrap();
        let element = format!("<c:{}>", chart_type.xml_element_name());
        assert_eq!(count(&xml, &element), 2, "{chart_type}");
        assert_eq!(count(&xml, "<c:catAx>") + count(&xml, "<c:valAx>"), 4);
        assert!(xml.contains(r#"<c:axPos val="l"/>"#));
        assert!(xml.contains(r#"<c:axPos val="r"/>"#));
        assert!(xml.contains(r#"<c:tickLblPos val="high"/>"#));
        assert!(xml.contains(r#"<c:tickLblPos val="low"/>"#));
    }
}

#[test]
fn test_assembly_is_idempotent() {
    let mut chart = Chart::new(ChartType::ColumnStacked);
    chart.title_set_name("Department Employees and Budget");
    chart.add_series(None, Some("Data!$B$2:$B$7")).unwrap();
    chart
        .add_series_on_axis(None, Some("Data!$C$2:$C$7"), AxisGroup::Secondary)
        .unwrap();

    let first = chart.assemble_xml().unwrap();
    let second = chart.assemble_xml().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_pie_secondary_rejected_leaves_chart_unchanged() {
    let mut chart = Chart::new(ChartType::Pie);
    chart.add_series(None, Some("Sheet1!$A$1:$A$5")).unwrap();
    let before = chart.assemble_xml().unwrap();

    let err = chart
        .add_series_on_axis(None, Some("Sheet1!$B$1:$B$5"), AxisGroup::Secondary)
        .unwrap_err();
    assert!(matches!(err, Error::FeatureNotSupported(_)));
    assert_eq!(chart.assemble_xml().unwrap(), before);
}

#[test]
fn test_series_order_within_groups() {
    let mut chart = Chart::new(ChartType::Line);
    chart.add_series(None, Some("S!$A$1:$A$3")).unwrap();
    chart
        .add_series_on_axis(None, Some("S!$B$1:$B$3"), AxisGroup::Secondary)
        .unwrap();
    chart.add_series(None, Some("S!$C$1:$C$3")).unwrap();

    let xml = chart.assemble_xml().unwrap();
    let a = xml.find("S!$A$1:$A$3").unwrap();
    let b = xml.find("S!$B$1:$B$3").unwrap();
    let c = xml.find("S!$C$1:$C$3").unwrap();
    // Primary group first, in insertion order, then the secondary group.
    assert!(a < c && c < b);
    assert!(xml.contains(r#"<c:idx val="2"/><c:order val="2"/>"#));
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn chart_type_strategy() -> impl Strategy<Value = ChartType> {
        prop_oneof![
            Just(ChartType::Area),
            Just(ChartType::BarStacked),
            Just(ChartType::Column),
            Just(ChartType::LineStackedPercent),
            Just(ChartType::ScatterStraightWithMarkers),
            Just(ChartType::RadarFilled),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_groups_preserve_relative_order(
            chart_type in chart_type_strategy(),
            secondary in proptest::collection::vec(any::<bool>(), 0..12),
        ) {
            let mut chart = Chart::new(chart_type);
            for (i, &on_secondary) in secondary.iter().enumerate() {
                let values = format!("Sheet1!$A${}:$A${}", i + 1, i + 5);
                let group = if on_secondary { AxisGroup::Secondary } else { AxisGroup::Primary };
                chart.add_series_on_axis(None, Some(&values), group).unwrap();
            }

            let assembly = chart.assemble();
            let expected_primary: Vec<usize> =
                (0..secondary.len()).filter(|&i| !secondary[i]).collect();
            let expected_secondary: Vec<usize> =
                (0..secondary.len()).filter(|&i| secondary[i]).collect();

            prop_assert_eq!(assembly.series_in(AxisGroup::Primary), expected_primary.as_slice());
            prop_assert_eq!(assembly.series_in(AxisGroup::Secondary), expected_secondary.as_slice());
            prop_assert_eq!(assembly.has_secondary_axis, secondary.contains(&true));
            let expected_axes = if assembly.has_secondary_axis { 4 } else { 2 };
            prop_assert_eq!(assembly.axes.len(), expected_axes);
        }

        #[test]
        fn prop_assemble_xml_is_deterministic(
            chart_type in chart_type_strategy(),
            secondary in proptest::collection::vec(any::<bool>(), 0..6),
        ) {
            let mut chart = Chart::new(chart_type);
            for &on_secondary in &secondary {
                let group = if on_secondary { AxisGroup::Secondary } else { AxisGroup::Primary };
                chart.add_series_on_axis(None, Some("Sheet1!$B$1:$B$5"), group).unwrap();
            }
            prop_assert_eq!(chart.assemble_xml().unwrap(), chart.assemble_xml().unwrap());
        }
    }
}
