use crate::models::{
    Bar, ChartResult, Dashboard, Metric, MetricSeries, MetricStyle, XAxisSpec, YAxisSpec,
};
use chrono::NaiveDate;

static CASES_STYLE: MetricStyle = MetricStyle {
    name: "Case number",
    color: "#648fff",
    hover_label: "Number of confirmed cases",
    value_label: "Confirmed Cases",
    y_title: "Confirmed Cases",
    y_padding: 50,
};

static ICU_STYLE: MetricStyle = MetricStyle {
    name: "ICU admissions",
    color: "#dc267f",
    hover_label: "Number of ICU admissions",
    value_label: "Admissions",
    y_title: "Intensive Care Admissions",
    y_padding: 10,
};

static DEATHS_STYLE: MetricStyle = MetricStyle {
    name: "Deaths",
    color: "#785ef0",
    hover_label: "Number of deaths",
    value_label: "Deaths",
    y_title: "Deaths",
    y_padding: 10,
};

pub fn style(metric: Metric) -> &'static MetricStyle {
    match metric {
        Metric::Cases => &CASES_STYLE,
        Metric::Icu => &ICU_STYLE,
        Metric::Deaths => &DEATHS_STYLE,
    }
}

/// Fixed first tick of every x axis (the Monday before reporting starts),
/// kept regardless of the filtered window.
pub fn x_axis_tick0() -> NaiveDate {
    // Known-valid calendar date.
    NaiveDate::from_ymd_opt(2020, 2, 17).unwrap()
}

pub fn cases_chart(
    data: &Dashboard,
    region: &str,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> ChartResult {
    render_chart(&data.cases, region, start_date, end_date, &CASES_STYLE)
}

pub fn icu_chart(
    data: &Dashboard,
    region: &str,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> ChartResult {
    render_chart(&data.icu, region, start_date, end_date, &ICU_STYLE)
}

pub fn deaths_chart(
    data: &Dashboard,
    region: &str,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> ChartResult {
    render_chart(&data.deaths, region, start_date, end_date, &DEATHS_STYLE)
}

pub fn render_chart(
    series: &MetricSeries,
    region: &str,
    start_date: NaiveDate,
    end_date: NaiveDate,
    style: &MetricStyle,
) -> ChartResult {
    // Upstream window convention: start exclusive, end inclusive.
    let mut bars: Vec<Bar> = series
        .rows
        .iter()
        .filter(|row| row.date > start_date && row.date <= end_date)
        .filter(|row| row.region == region)
        .map(|row| Bar {
            date: row.date,
            value: row.value,
        })
        .collect();
    bars.sort_by_key(|bar| bar.date);

    // Max over an empty selection is undefined; such a chart renders with a
    // [0, 0] range and no bars instead of failing.
    let y_max = bars
        .iter()
        .map(|bar| bar.value)
        .max()
        .map(|max| max.saturating_add(style.y_padding))
        .unwrap_or(0);

    ChartResult {
        region: region.to_string(),
        name: style.name.to_string(),
        color: style.color.to_string(),
        hover_label: style.hover_label.to_string(),
        value_label: style.value_label.to_string(),
        background: "white".to_string(),
        bars,
        x_axis: XAxisSpec {
            title: "Date".to_string(),
            show_grid: true,
            line_color: "black".to_string(),
            tick0: x_axis_tick0(),
        },
        y_axis: YAxisSpec {
            title: style.y_title.to_string(),
            show_grid: true,
            grid_color: "lightgrey".to_string(),
            line_color: "black".to_string(),
            range: [0, y_max],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SeriesRow, WeeklyRecord};
    use crate::series::{build_dashboard, build_metric_series, SWEDEN};

    fn day(year: i32, month: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, d).unwrap()
    }

    fn record(date: NaiveDate, region: &str, cases: u64, icu: u64, deaths: u64) -> WeeklyRecord {
        WeeklyRecord {
            date,
            region: region.to_string(),
            cases,
            icu,
            deaths,
        }
    }

    fn sample_series() -> MetricSeries {
        let records = vec![
            record(day(2020, 2, 24), "A", 10, 2, 1),
            record(day(2020, 3, 2), "A", 20, 4, 2),
            record(day(2020, 3, 9), "A", 30, 6, 3),
        ];
        build_metric_series(&records, Metric::Cases)
    }

    #[test]
    fn start_is_exclusive_and_end_is_inclusive() {
        let series = sample_series();
        let result = render_chart(
            &series,
            "A",
            day(2020, 2, 24),
            day(2020, 3, 2),
            style(Metric::Cases),
        );

        // The row sitting exactly on the start date is dropped, the row on
        // the end date is kept.
        assert_eq!(result.bars.len(), 1);
        assert_eq!(result.bars[0].date, day(2020, 3, 2));
        assert_eq!(result.bars[0].value, 20);
    }

    #[test]
    fn y_range_adds_metric_padding() {
        let records = vec![
            record(day(2020, 3, 2), "A", 100, 30, 7),
            record(day(2020, 3, 9), "A", 80, 12, 9),
        ];
        let data = build_dashboard(&records);
        let start = day(2020, 2, 24);
        let end = day(2020, 3, 9);

        let cases = cases_chart(&data, "A", start, end);
        assert_eq!(cases.y_axis.range, [0, 150]);

        let icu = icu_chart(&data, "A", start, end);
        assert_eq!(icu.y_axis.range, [0, 40]);

        let deaths = deaths_chart(&data, "A", start, end);
        assert_eq!(deaths.y_axis.range, [0, 19]);
    }

    #[test]
    fn empty_selection_renders_zero_range() {
        let series = sample_series();
        // Window of zero width: (start, start] keeps nothing.
        let result = render_chart(
            &series,
            "A",
            day(2020, 3, 2),
            day(2020, 3, 2),
            style(Metric::Cases),
        );
        assert!(result.bars.is_empty());
        assert_eq!(result.y_axis.range, [0, 0]);
    }

    #[test]
    fn region_without_rows_in_window_renders_zero_range() {
        let records = vec![
            record(day(2020, 2, 24), "A", 10, 2, 1),
            record(day(2020, 3, 9), "B", 5, 1, 0),
        ];
        let series = build_metric_series(&records, Metric::Cases);
        let result = render_chart(
            &series,
            "B",
            day(2020, 2, 17),
            day(2020, 3, 2),
            style(Metric::Cases),
        );
        assert!(result.bars.is_empty());
        assert_eq!(result.y_axis.range, [0, 0]);
    }

    #[test]
    fn synthetic_region_filters_like_any_other() {
        let records = vec![
            record(day(2020, 2, 24), "A", 10, 2, 1),
            record(day(2020, 2, 24), "B", 5, 1, 0),
            record(day(2020, 3, 2), "A", 20, 4, 2),
        ];
        let series = build_metric_series(&records, Metric::Cases);
        let result = render_chart(
            &series,
            SWEDEN,
            day(2020, 2, 17),
            day(2020, 3, 2),
            style(Metric::Cases),
        );

        let values: Vec<u64> = result.bars.iter().map(|bar| bar.value).collect();
        assert_eq!(values, vec![15, 20]);
        assert_eq!(result.y_axis.range, [0, 70]);
    }

    #[test]
    fn wire_shape_matches_what_the_page_reads() {
        let series = sample_series();
        let result = render_chart(
            &series,
            "A",
            day(2020, 2, 17),
            day(2020, 3, 2),
            style(Metric::Cases),
        );

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["region"], "A");
        assert_eq!(value["color"], "#648fff");
        assert_eq!(value["background"], "white");
        assert_eq!(value["hover_label"], "Number of confirmed cases");
        assert_eq!(value["bars"][0]["date"], "2020-02-24");
        assert_eq!(value["bars"][0]["value"], 10);
        assert_eq!(value["x_axis"]["tick0"], "2020-02-17");
        assert_eq!(value["y_axis"]["range"], serde_json::json!([0, 70]));
    }

    #[test]
    fn x_axis_anchor_ignores_the_window() {
        let series = sample_series();
        let result = render_chart(
            &series,
            "A",
            day(2020, 3, 2),
            day(2020, 3, 9),
            style(Metric::Deaths),
        );
        assert_eq!(result.x_axis.tick0, day(2020, 2, 17));
    }

    #[test]
    fn bars_come_out_date_ordered() {
        let series = MetricSeries {
            rows: vec![
                SeriesRow {
                    date: day(2020, 3, 9),
                    region: "A".to_string(),
                    value: 3,
                },
                SeriesRow {
                    date: day(2020, 2, 24),
                    region: "A".to_string(),
                    value: 1,
                },
                SeriesRow {
                    date: day(2020, 3, 2),
                    region: "A".to_string(),
                    value: 2,
                },
            ],
        };
        let result = render_chart(
            &series,
            "A",
            day(2020, 2, 17),
            day(2020, 3, 9),
            style(Metric::Icu),
        );
        let dates: Vec<NaiveDate> = result.bars.iter().map(|bar| bar.date).collect();
        assert_eq!(
            dates,
            vec![day(2020, 2, 24), day(2020, 3, 2), day(2020, 3, 9)]
        );
    }
}
