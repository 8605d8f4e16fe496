//! Chart XML writer.
//!
//! This module generates the `xl/charts/chartN.xml` part from a [`Chart`].
//! The plot area layout comes from [`Chart::assemble`]: every type group is
//! written before any axis, primary group first.

use std::io::Write;

use crate::common::error::Result;
use crate::common::xml::{XmlWriter, format_number};
use crate::ooxml::charts::axis::{Axis, AxisCrossing, AxisKind, Gridlines, ResolvedAxis};
use crate::ooxml::charts::chart::{Chart, DEFAULT_STYLE, TypeGroupPlan};
use crate::ooxml::charts::legend::Legend;
use crate::ooxml::charts::models::{
    ChartFill, ChartLine, DataSourceRef, Layout, NumberFormat, ShapeProperties, Title, TitleText,
};
use crate::ooxml::charts::plot_area::TypeGroupSpec;
use crate::ooxml::charts::series::{
    DataLabels, ErrorBars, Marker, Series, Trendline, TrendlineType,
};
use crate::ooxml::charts::types::MarkerStyle;

const NS_CHART: &str = "http://schemas.openxmlformats.org/drawingml/2006/chart";
const NS_DRAWING: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
const NS_RELATIONSHIPS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

/// Rotation applied to titles of vertical axes.
const VERTICAL_TITLE_ROTATION: &str = "-5400000";

const EMU_PER_POINT: f64 = 12700.0;

/// Serialize a chart part to a string.
pub fn assemble_xml(chart: &Chart) -> Result<String> {
    let mut writer = XmlWriter::new(Vec::with_capacity(4096));
    write_chart(&mut writer, chart)?;
    Ok(String::from_utf8(writer.into_inner())?)
}

/// Write a chart part.
pub fn write_chart<W: Write>(w: &mut XmlWriter<W>, chart: &Chart) -> Result<()> {
    let assembly = chart.assemble();
    let spec = chart.chart_type().type_group_spec();

    w.declaration()?;
    w.start_with_attrs(
        "c:chartSpace",
        &[
            ("xmlns:c", NS_CHART),
            ("xmlns:a", NS_DRAWING),
            ("xmlns:r", NS_RELATIONSHIPS),
        ],
    )?;
    w.val("c:lang", "en-US")?;
    if chart.style != DEFAULT_STYLE {
        w.val_int("c:style", chart.style)?;
    }

    w.start("c:chart")?;

    if let Some(title) = &chart.title {
        write_title(w, title, false)?;
    }
    if chart.title_deleted {
        w.val_bool("c:autoTitleDeleted", true)?;
    }

    w.start("c:plotArea")?;
    write_layout(w, chart.plot_area_layout.as_ref())?;
    for plan in &assembly.groups {
        write_type_group(w, chart, &spec, plan)?;
    }
    for resolved in &assembly.axes {
        write_axis(w, chart.axis(resolved.slot), resolved, &spec)?;
    }
    write_shape_properties(w, &chart.plot_area)?;
    w.end("c:plotArea")?;

    if chart.legend.is_visible() {
        write_legend(w, &chart.legend)?;
    }

    w.val_bool("c:plotVisOnly", !chart.show_hidden_data)?;
    w.val("c:dispBlanksAs", chart.display_blanks_as.xml_value())?;
    w.end("c:chart")?;

    write_shape_properties(w, &chart.chart_area)?;

    w.start("c:printSettings")?;
    w.empty("c:headerFooter")?;
    w.empty_with_attrs(
        "c:pageMargins",
        &[
            ("b", "0.75"),
            ("l", "0.7"),
            ("r", "0.7"),
            ("t", "0.75"),
            ("header", "0.3"),
            ("footer", "0.3"),
        ],
    )?;
    w.empty("c:pageSetup")?;
    w.end("c:printSettings")?;

    w.end("c:chartSpace")?;
    Ok(())
}

fn write_type_group<W: Write>(
    w: &mut XmlWriter<W>,
    chart: &Chart,
    spec: &TypeGroupSpec,
    plan: &TypeGroupPlan,
) -> Result<()> {
    let element = format!("c:{}", spec.element);
    w.start(&element)?;

    if let Some(direction) = spec.bar_direction {
        w.val("c:barDir", direction.xml_value())?;
    }
    if let Some(style) = spec.scatter_style {
        w.val("c:scatterStyle", style.xml_value())?;
    }
    if let Some(style) = spec.radar_style {
        w.val("c:radarStyle", style.xml_value())?;
    }
    if let Some(grouping) = spec.grouping {
        w.val("c:grouping", grouping.xml_value())?;
    }
    if spec.vary_colors {
        w.val_bool("c:varyColors", true)?;
    }

    let series = chart.series_list();
    for &index in &plan.series {
        write_series(w, spec, index, &series[index])?;
    }

    if let Some(gap_width) = spec.gap_width {
        w.val_int("c:gapWidth", gap_width)?;
    }
    if let Some(overlap) = spec.overlap {
        w.val_int("c:overlap", overlap)?;
    }
    if spec.group_marker {
        w.val_bool("c:marker", true)?;
    }
    if let Some((x_id, y_id)) = plan.axis_ids {
        w.val_int("c:axId", x_id)?;
        w.val_int("c:axId", y_id)?;
    }
    if let Some(angle) = spec.first_slice_angle {
        w.val_int("c:firstSliceAng", angle)?;
    }
    if let Some(hole_size) = spec.hole_size {
        w.val_int("c:holeSize", hole_size)?;
    }

    w.end(&element)?;
    Ok(())
}

fn write_series<W: Write>(
    w: &mut XmlWriter<W>,
    spec: &TypeGroupSpec,
    index: usize,
    series: &Series,
) -> Result<()> {
    w.start("c:ser")?;
    w.val_int("c:idx", index)?;
    w.val_int("c:order", index)?;

    if let Some(name) = &series.name {
        w.start("c:tx")?;
        match name {
            TitleText::Reference(source) => write_str_ref(w, source)?,
            TitleText::Literal(text) => w.text_element("c:v", text)?,
        }
        w.end("c:tx")?;
    }

    if spec.hide_series_line && series.shape.line.is_none() {
        let shape = ShapeProperties {
            line: Some(ChartLine::hidden().with_width(2.25)),
            fill: series.shape.fill,
        };
        write_shape_properties(w, &shape)?;
    } else {
        write_shape_properties(w, &series.shape)?;
    }

    if series.invert_if_negative {
        w.val_bool("c:invertIfNegative", true)?;
    }

    match &series.marker {
        Some(marker) => write_marker(w, marker)?,
        None if spec.hide_series_marker => write_marker(
            w,
            &Marker {
                style: Some(MarkerStyle::None),
                ..Marker::default()
            },
        )?,
        None => {},
    }

    if let Some(labels) = &series.data_labels {
        write_data_labels(w, labels)?;
    }
    if let Some(trendline) = &series.trendline {
        write_trendline(w, trendline)?;
    }

    if spec.x_axis_kind == AxisKind::Value {
        if let Some(error_bars) = &series.x_error_bars {
            write_error_bars(w, error_bars, Some("x"))?;
        }
        if let Some(error_bars) = &series.y_error_bars {
            write_error_bars(w, error_bars, Some("y"))?;
        }
        if let Some(source) = &series.categories {
            w.start("c:xVal")?;
            write_num_ref(w, source)?;
            w.end("c:xVal")?;
        }
        if let Some(source) = &series.values {
            w.start("c:yVal")?;
            write_num_ref(w, source)?;
            w.end("c:yVal")?;
        }
    } else {
        if let Some(error_bars) = &series.y_error_bars {
            write_error_bars(w, error_bars, None)?;
        }
        if let Some(source) = &series.categories {
            w.start("c:cat")?;
            write_num_ref(w, source)?;
            w.end("c:cat")?;
        }
        if let Some(source) = &series.values {
            w.start("c:val")?;
            write_num_ref(w, source)?;
            w.end("c:val")?;
        }
    }

    if let Some(default_smooth) = spec.smooth {
        let smooth = series.smooth.unwrap_or(default_smooth);
        if smooth || series.smooth.is_some() {
            w.val_bool("c:smooth", smooth)?;
        }
    }

    w.end("c:ser")?;
    Ok(())
}

fn write_num_ref<W: Write>(w: &mut XmlWriter<W>, source: &DataSourceRef) -> Result<()> {
    w.start("c:numRef")?;
    w.text_element("c:f", &source.formula)?;
    w.end("c:numRef")?;
    Ok(())
}

fn write_str_ref<W: Write>(w: &mut XmlWriter<W>, source: &DataSourceRef) -> Result<()> {
    w.start("c:strRef")?;
    w.text_element("c:f", &source.formula)?;
    w.end("c:strRef")?;
    Ok(())
}

fn write_marker<W: Write>(w: &mut XmlWriter<W>, marker: &Marker) -> Result<()> {
    w.start("c:marker")?;
    if let Some(style) = marker.style {
        w.val("c:symbol", style.xml_value())?;
    }
    if let Some(size) = marker.size {
        w.val_int("c:size", size)?;
    }
    write_shape_properties(w, &marker.shape)?;
    w.end("c:marker")?;
    Ok(())
}

fn write_data_labels<W: Write>(w: &mut XmlWriter<W>, labels: &DataLabels) -> Result<()> {
    w.start("c:dLbls")?;
    if let Some(format) = &labels.num_format {
        write_num_format(w, format)?;
    }
    if let Some(position) = labels.position {
        w.val("c:dLblPos", position.xml_value())?;
    }
    w.val_bool("c:showLegendKey", labels.show_legend_key)?;
    w.val_bool("c:showVal", labels.show_value)?;
    w.val_bool("c:showCatName", labels.show_category_name)?;
    w.val_bool("c:showSerName", labels.show_series_name)?;
    w.val_bool("c:showPercent", labels.show_percent)?;
    w.val_bool("c:showBubbleSize", false)?;
    if let Some(separator) = &labels.separator {
        w.text_element("c:separator", separator)?;
    }
    if labels.show_leader_lines {
        w.val_bool("c:showLeaderLines", true)?;
    }
    w.end("c:dLbls")?;
    Ok(())
}

fn write_trendline<W: Write>(w: &mut XmlWriter<W>, trendline: &Trendline) -> Result<()> {
    w.start("c:trendline")?;
    if let Some(name) = &trendline.name {
        w.text_element("c:name", name)?;
    }
    if let Some(line) = trendline.line {
        write_shape_properties(w, &ShapeProperties { line: Some(line), fill: None })?;
    }
    w.val("c:trendlineType", trendline.trendline_type.xml_value())?;
    match trendline.trendline_type {
        TrendlineType::Polynomial(order) => w.val_int("c:order", order.clamp(2, 6))?,
        TrendlineType::MovingAverage(period) => w.val_int("c:period", period.max(2))?,
        _ => {},
    }
    if let Some(forward) = trendline.forward {
        w.val_num("c:forward", forward)?;
    }
    if let Some(backward) = trendline.backward {
        w.val_num("c:backward", backward)?;
    }
    if let Some(intercept) = trendline.intercept {
        w.val_num("c:intercept", intercept)?;
    }
    if trendline.display_r_squared {
        w.val_bool("c:dispRSqr", true)?;
    }
    if trendline.display_equation {
        w.val_bool("c:dispEq", true)?;
    }
    w.end("c:trendline")?;
    Ok(())
}

fn write_error_bars<W: Write>(
    w: &mut XmlWriter<W>,
    error_bars: &ErrorBars,
    direction: Option<&str>,
) -> Result<()> {
    w.start("c:errBars")?;
    if let Some(direction) = direction {
        w.val("c:errDir", direction)?;
    }
    w.val("c:errBarType", error_bars.direction.xml_value())?;
    w.val("c:errValType", error_bars.value.xml_value())?;
    w.val_bool("c:noEndCap", !error_bars.end_cap)?;
    if let Some(amount) = error_bars.value.amount() {
        w.val_num("c:val", amount)?;
    }
    if let Some(line) = error_bars.line {
        write_shape_properties(w, &ShapeProperties { line: Some(line), fill: None })?;
    }
    w.end("c:errBars")?;
    Ok(())
}

fn write_axis<W: Write>(
    w: &mut XmlWriter<W>,
    axis: &Axis,
    resolved: &ResolvedAxis,
    spec: &TypeGroupSpec,
) -> Result<()> {
    let element = format!("c:{}", resolved.kind.xml_element_name());
    w.start(&element)?;
    w.val_int("c:axId", resolved.id)?;

    w.start("c:scaling")?;
    if let Some(base) = axis.log_base {
        w.val_int("c:logBase", base)?;
    }
    w.val("c:orientation", if axis.reverse { "maxMin" } else { "minMax" })?;
    if let Some(max) = axis.max {
        w.val_num("c:max", max)?;
    }
    if let Some(min) = axis.min {
        w.val_num("c:min", min)?;
    }
    w.end("c:scaling")?;

    w.val_bool("c:delete", resolved.deleted)?;
    w.val("c:axPos", resolved.position.xml_value())?;

    write_gridlines(w, "c:majorGridlines", &axis.major_gridlines)?;
    write_gridlines(w, "c:minorGridlines", &axis.minor_gridlines)?;

    if let Some(title) = &axis.title {
        write_title(w, title, resolved.position.is_vertical())?;
    }

    match (&axis.num_format, resolved.kind) {
        (Some(format), _) => write_num_format(w, format)?,
        (None, AxisKind::Value) => write_num_format(w, &NumberFormat::general())?,
        (None, AxisKind::Category) => {},
    }

    if let Some(mark) = axis.major_tick_mark {
        w.val("c:majorTickMark", mark.xml_value())?;
    }
    if let Some(mark) = axis.minor_tick_mark {
        w.val("c:minorTickMark", mark.xml_value())?;
    }
    w.val("c:tickLblPos", resolved.label_position.xml_value())?;
    write_shape_properties(w, &axis.shape)?;

    w.val_int("c:crossAx", resolved.cross_axis_id)?;
    match resolved.crossing {
        AxisCrossing::At(value) => w.val_num("c:crossesAt", value)?,
        crossing => {
            if let Some(value) = crossing.xml_value() {
                w.val("c:crosses", value)?;
            }
        },
    }

    match resolved.kind {
        AxisKind::Category => {
            w.val_bool("c:auto", true)?;
            w.val(
                "c:lblAlgn",
                axis.label_align
                    .map(|a| a.xml_value())
                    .unwrap_or("ctr"),
            )?;
            w.val_int("c:lblOffset", 100u16)?;
            if let Some(unit) = axis.interval_unit {
                w.val_int("c:tickLblSkip", unit)?;
            }
            if let Some(tick) = axis.interval_tick {
                w.val_int("c:tickMarkSkip", tick)?;
            }
            w.val_bool("c:noMultiLvlLbl", false)?;
        },
        AxisKind::Value => {
            w.val("c:crossBetween", spec.cross_between.xml_value())?;
            if let Some(unit) = axis.major_unit {
                w.val_num("c:majorUnit", unit)?;
            }
            if let Some(unit) = axis.minor_unit {
                w.val_num("c:minorUnit", unit)?;
            }
            if let Some(units) = axis.display_units {
                w.start("c:dispUnits")?;
                w.val("c:builtInUnit", units.xml_value())?;
                w.empty("c:dispUnitsLbl")?;
                w.end("c:dispUnits")?;
            }
        },
    }

    w.end(&element)?;
    Ok(())
}

fn write_gridlines<W: Write>(w: &mut XmlWriter<W>, tag: &str, gridlines: &Gridlines) -> Result<()> {
    if !gridlines.visible {
        return Ok(());
    }
    match gridlines.line {
        Some(line) => {
            w.start(tag)?;
            write_shape_properties(w, &ShapeProperties { line: Some(line), fill: None })?;
            w.end(tag)?;
        },
        None => w.empty(tag)?,
    }
    Ok(())
}

fn write_num_format<W: Write>(w: &mut XmlWriter<W>, format: &NumberFormat) -> Result<()> {
    w.empty_with_attrs(
        "c:numFmt",
        &[
            ("formatCode", format.format_code.as_str()),
            ("sourceLinked", if format.source_linked { "1" } else { "0" }),
        ],
    )?;
    Ok(())
}

fn write_title<W: Write>(w: &mut XmlWriter<W>, title: &Title, vertical: bool) -> Result<()> {
    let body_attrs: &[(&str, &str)] = if vertical {
        &[("rot", VERTICAL_TITLE_ROTATION), ("vert", "horz")]
    } else {
        &[]
    };

    w.start("c:title")?;

    match &title.text {
        Some(TitleText::Literal(text)) => {
            w.start("c:tx")?;
            w.start("c:rich")?;
            w.empty_with_attrs("a:bodyPr", body_attrs)?;
            w.empty("a:lstStyle")?;
            w.start("a:p")?;
            w.start("a:pPr")?;
            w.empty("a:defRPr")?;
            w.end("a:pPr")?;
            w.start("a:r")?;
            w.empty_with_attrs("a:rPr", &[("lang", "en-US")])?;
            w.text_element("a:t", text)?;
            w.end("a:r")?;
            w.end("a:p")?;
            w.end("c:rich")?;
            w.end("c:tx")?;
        },
        Some(TitleText::Reference(source)) => {
            w.start("c:tx")?;
            write_str_ref(w, source)?;
            w.end("c:tx")?;
        },
        None => {},
    }

    write_layout(w, title.layout.as_ref())?;
    if title.overlay {
        w.val_bool("c:overlay", true)?;
    }

    if vertical && !matches!(title.text, Some(TitleText::Literal(_))) {
        w.start("c:txPr")?;
        w.empty_with_attrs("a:bodyPr", body_attrs)?;
        w.empty("a:lstStyle")?;
        w.start("a:p")?;
        w.start("a:pPr")?;
        w.empty("a:defRPr")?;
        w.end("a:pPr")?;
        w.empty_with_attrs("a:endParaRPr", &[("lang", "en-US")])?;
        w.end("a:p")?;
        w.end("c:txPr")?;
    }

    w.end("c:title")?;
    Ok(())
}

fn write_layout<W: Write>(w: &mut XmlWriter<W>, layout: Option<&Layout>) -> Result<()> {
    let Some(layout) = layout else {
        w.empty("c:layout")?;
        return Ok(());
    };

    w.start("c:layout")?;
    w.start("c:manualLayout")?;
    if layout.inner {
        w.val("c:layoutTarget", "inner")?;
    }
    w.val("c:xMode", "edge")?;
    w.val("c:yMode", "edge")?;
    w.val_num("c:x", layout.x)?;
    w.val_num("c:y", layout.y)?;
    if layout.has_size() {
        w.val_num("c:w", layout.width)?;
        w.val_num("c:h", layout.height)?;
    }
    w.end("c:manualLayout")?;
    w.end("c:layout")?;
    Ok(())
}

fn write_legend<W: Write>(w: &mut XmlWriter<W>, legend: &Legend) -> Result<()> {
    w.start("c:legend")?;
    if let Some(position) = legend.position.xml_value() {
        w.val("c:legendPos", position)?;
    }
    for &index in &legend.deleted_entries {
        w.start("c:legendEntry")?;
        w.val_int("c:idx", index)?;
        w.val_bool("c:delete", true)?;
        w.end("c:legendEntry")?;
    }
    if let Some(layout) = &legend.layout {
        write_layout(w, Some(layout))?;
    }
    if legend.position.is_overlay() {
        w.val_bool("c:overlay", true)?;
    }
    w.end("c:legend")?;
    Ok(())
}

fn write_shape_properties<W: Write>(w: &mut XmlWriter<W>, shape: &ShapeProperties) -> Result<()> {
    if shape.is_empty() {
        return Ok(());
    }

    w.start("c:spPr")?;
    if let Some(fill) = &shape.fill {
        write_fill(w, fill)?;
    }
    if let Some(line) = &shape.line {
        write_line(w, line)?;
    }
    w.end("c:spPr")?;
    Ok(())
}

fn write_fill<W: Write>(w: &mut XmlWriter<W>, fill: &ChartFill) -> Result<()> {
    if fill.none {
        w.empty("a:noFill")?;
    } else if let Some(color) = fill.color {
        write_solid_fill(w, color, fill.transparency)?;
    }
    Ok(())
}

fn write_line<W: Write>(w: &mut XmlWriter<W>, line: &ChartLine) -> Result<()> {
    match line.width {
        Some(width) => {
            let emu = format_number((width * EMU_PER_POINT).round());
            w.start_with_attrs("a:ln", &[("w", emu.as_str())])?;
        },
        None => w.start("a:ln")?,
    }

    if line.none {
        w.empty("a:noFill")?;
    } else if let Some(color) = line.color {
        write_solid_fill(w, color, line.transparency)?;
    }
    if let Some(dash) = line.dash {
        w.val("a:prstDash", dash.xml_value())?;
    }

    w.end("a:ln")?;
    Ok(())
}

fn write_solid_fill<W: Write>(w: &mut XmlWriter<W>, color: u32, transparency: u8) -> Result<()> {
    let rgb = format!("{:06X}", color & 0x00FF_FFFF);
    w.start("a:solidFill")?;
    if transparency > 0 {
        w.start_with_attrs("a:srgbClr", &[("val", rgb.as_str())])?;
        let alpha = (100 - u32::from(transparency.min(100))) * 1000;
        w.val_int("a:alpha", alpha)?;
        w.end("a:srgbClr")?;
    } else {
        w.val("a:srgbClr", &rgb)?;
    }
    w.end("a:solidFill")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::id::AxisIds;
    use crate::ooxml::charts::axis::AxisGroup;
    use crate::ooxml::charts::types::{ChartType, LegendPosition};

    fn xml(chart: &Chart) -> String {
        assemble_xml(chart).unwrap()
    }

    #[test]
    fn test_plot_area_is_type_groups_then_axes() {
        let mut chart = Chart::with_axis_ids(ChartType::Column, AxisIds::new(11, 12, 13, 14));
        chart.add_series(None, Some("Sheet1!$A$1:$A$5")).unwrap();
        chart
            .add_series_on_axis(None, Some("Sheet1!$B$1:$B$5"), AxisGroup::Secondary)
            .unwrap();
        let xml = xml(&chart);

        let last_group = xml.rfind("</c:barChart>").unwrap();
        let first_axis = xml.find("<c:catAx>").unwrap();
        assert!(last_group < first_axis);
        assert_eq!(xml.matches("<c:barChart>").count(), 2);
        assert_eq!(xml.matches("<c:catAx>").count(), 2);
        assert_eq!(xml.matches("<c:valAx>").count(), 2);

        let ids = [
            r#"<c:axId val="11"/>"#,
            r#"<c:axId val="12"/>"#,
            r#"<c:axId val="13"/>"#,
            r#"<c:axId val="14"/>"#,
        ];
        let positions: Vec<_> = ids.iter().map(|id| xml.find(id).unwrap()).collect();
        assert!(positions.windows(2).all(|p| p[0] < p[1]));
    }

    #[test]
    fn test_secondary_x_axis_is_deleted() {
        let mut chart = Chart::with_axis_ids(ChartType::Line, AxisIds::new(1, 2, 3, 4));
        chart
            .add_series_on_axis(None, Some("Sheet1!$B$1:$B$5"), AxisGroup::Secondary)
            .unwrap();
        let xml = xml(&chart);
        let x2 = &xml[xml.rfind("<c:catAx>").unwrap()..];
        assert!(x2.contains(r#"<c:axId val="3"/>"#));
        assert!(x2.contains(r#"<c:delete val="1"/>"#));
        assert!(x2.contains(r#"<c:crossAx val="4"/>"#));
        assert!(x2.contains(r#"<c:crosses val="max"/>"#));
    }

    #[test]
    fn test_secondary_y_axis_block() {
        let mut chart = Chart::with_axis_ids(ChartType::Column, AxisIds::new(1, 2, 3, 4));
        chart.add_series(None, Some("Sheet1!$A$1:$A$5")).unwrap();
        chart
            .add_series_on_axis(None, Some("Sheet1!$B$1:$B$5"), AxisGroup::Secondary)
            .unwrap();
        let xml = xml(&chart);

        let start = xml.rfind("<c:valAx>").unwrap();
        let end = start + xml[start..].find("</c:valAx>").unwrap();
        let y2 = &xml[start..end];
        assert!(y2.contains(r#"<c:axId val="4"/>"#));
        assert!(y2.contains(r#"<c:delete val="0"/>"#));
        assert!(y2.contains(r#"<c:axPos val="r"/>"#));
        assert!(y2.contains(r#"<c:tickLblPos val="high"/>"#));
        assert!(y2.contains(r#"<c:crossAx val="3"/>"#));
        assert!(y2.contains(r#"<c:crosses val="max"/>"#));

        // The primary Y-axis keeps the left side and low labels.
        let first = xml.find("<c:valAx>").unwrap();
        let y1 = &xml[first..first + xml[first..].find("</c:valAx>").unwrap()];
        assert!(y1.contains(r#"<c:axPos val="l"/>"#));
        assert!(y1.contains(r#"<c:tickLblPos val="low"/>"#));
        assert!(y1.contains(r#"<c:crosses val="autoZero"/>"#));
    }

    #[test]
    fn test_non_finite_scale_values_not_written() {
        let mut chart = Chart::new(ChartType::Line);
        chart.add_series(None, Some("Sheet1!$A$1:$A$5")).unwrap();
        chart
            .y_axis_mut()
            .set_crossing(f64::INFINITY)
            .set_max(f64::NAN)
            .set_min(f64::NEG_INFINITY);
        let xml = xml(&chart);
        assert!(!xml.contains("inf"));
        assert!(!xml.contains("NaN"));
        assert!(!xml.contains("<c:crossesAt"));
    }

    #[test]
    fn test_vertical_axis_title_is_rotated() {
        let mut chart = Chart::new(ChartType::Column);
        chart.add_series(None, Some("Sheet1!$A$1:$A$5")).unwrap();
        chart.y_axis_mut().set_name("Employees");
        chart.x_axis_mut().set_name("Department");
        let xml = xml(&chart);
        assert_eq!(xml.matches(r#"rot="-5400000""#).count(), 1);
        assert!(xml.contains("<a:t>Employees</a:t>"));
    }

    #[test]
    fn test_axis_title_layout() {
        let mut chart = Chart::new(ChartType::Bar);
        chart.add_series(None, Some("Sheet1!$A$1:$A$5")).unwrap();
        chart
            .add_series_on_axis(None, Some("Sheet1!$B$1:$B$5"), AxisGroup::Secondary)
            .unwrap();
        chart
            .y2_axis_mut()
            .set_name("Budget ($M)")
            .set_name_layout(Layout::at(0.686, 0.314));
        let xml = xml(&chart);
        assert!(xml.contains(
            r#"<c:manualLayout><c:xMode val="edge"/><c:yMode val="edge"/><c:x val="0.686"/><c:y val="0.314"/></c:manualLayout>"#
        ));
    }

    #[test]
    fn test_crossing_at_value() {
        let mut chart = Chart::new(ChartType::Line);
        chart.add_series(None, Some("Sheet1!$A$1:$A$5")).unwrap();
        chart.y_axis_mut().set_crossing(2.5);
        let xml = xml(&chart);
        assert!(xml.contains(r#"<c:crossesAt val="2.5"/>"#));
    }

    #[test]
    fn test_series_name_and_sources() {
        let mut chart = Chart::new(ChartType::Column);
        let id = chart
            .add_series(Some("=Data!$A$2:$A$7"), Some("=Data!$B$2:$B$7"))
            .unwrap();
        chart.series_mut(id).unwrap().set_name("=Data!$B$1");
        let xml = xml(&chart);
        assert!(xml.contains("<c:tx><c:strRef><c:f>Data!$B$1</c:f></c:strRef></c:tx>"));
        assert!(xml.contains("<c:cat><c:numRef><c:f>Data!$A$2:$A$7</c:f></c:numRef></c:cat>"));
        assert!(xml.contains("<c:val><c:numRef><c:f>Data!$B$2:$B$7</c:f></c:numRef></c:val>"));
    }

    #[test]
    fn test_scatter_series_uses_xy_values() {
        let mut chart = Chart::new(ChartType::ScatterSmooth);
        chart
            .add_series(Some("Sheet1!$A$1:$A$3"), Some("Sheet1!$B$1:$B$3"))
            .unwrap();
        let xml = xml(&chart);
        assert!(xml.contains("<c:xVal>"));
        assert!(xml.contains("<c:yVal>"));
        assert!(xml.contains(r#"<c:smooth val="1"/>"#));
        assert!(xml.contains(r#"<c:symbol val="none"/>"#));
        assert!(!xml.contains("<c:catAx>"));
    }

    #[test]
    fn test_plain_scatter_hides_series_line() {
        let mut chart = Chart::new(ChartType::Scatter);
        chart
            .add_series(Some("Sheet1!$A$1:$A$3"), Some("Sheet1!$B$1:$B$3"))
            .unwrap();
        let xml = xml(&chart);
        assert!(xml.contains(r#"<c:spPr><a:ln w="28575"><a:noFill/></a:ln></c:spPr>"#));
    }

    #[test]
    fn test_pie_chart_has_no_axes() {
        let mut chart = Chart::new(ChartType::Doughnut);
        chart.add_series(None, Some("Sheet1!$A$1:$A$3")).unwrap();
        let xml = xml(&chart);
        assert!(!xml.contains("<c:axId"));
        assert!(xml.contains(r#"<c:varyColors val="1"/>"#));
        assert!(xml.contains(r#"<c:firstSliceAng val="0"/><c:holeSize val="50"/>"#));
    }

    #[test]
    fn test_stacked_bar_overlap() {
        let mut chart = Chart::new(ChartType::BarStacked);
        chart.add_series(None, Some("Sheet1!$A$1:$A$3")).unwrap();
        let xml = xml(&chart);
        assert!(xml.contains(r#"<c:barDir val="bar"/><c:grouping val="stacked"/>"#));
        assert!(xml.contains(r#"<c:gapWidth val="150"/><c:overlap val="100"/>"#));
    }

    #[test]
    fn test_legend_options() {
        let mut chart = Chart::new(ChartType::Line);
        chart.add_series(None, Some("Sheet1!$A$1:$A$3")).unwrap();
        chart
            .legend_set_position(LegendPosition::OverlayTopRight)
            .legend_delete_series(&[0]);
        let xml = xml(&chart);
        assert!(xml.contains(
            r#"<c:legend><c:legendPos val="tr"/><c:legendEntry><c:idx val="0"/><c:delete val="1"/></c:legendEntry><c:overlay val="1"/></c:legend>"#
        ));

        chart.legend_set_position(LegendPosition::None);
        assert!(!xml_has_legend(&chart));
    }

    fn xml_has_legend(chart: &Chart) -> bool {
        xml(chart).contains("<c:legend>")
    }

    #[test]
    fn test_line_and_fill_formatting() {
        let mut chart = Chart::new(ChartType::Column);
        let id = chart.add_series(None, Some("Sheet1!$A$1:$A$3")).unwrap();
        let series = chart.series_mut(id).unwrap();
        series.set_fill(ChartFill {
            color: Some(0xFF0000),
            none: false,
            transparency: 50,
        });
        series.set_line(ChartLine::solid(0x0000FF).with_width(1.0));
        let xml = xml(&chart);
        assert!(xml.contains(
            r#"<c:spPr><a:solidFill><a:srgbClr val="FF0000"><a:alpha val="50000"/></a:srgbClr></a:solidFill><a:ln w="12700"><a:solidFill><a:srgbClr val="0000FF"/></a:solidFill></a:ln></c:spPr>"#
        ));
    }
}
