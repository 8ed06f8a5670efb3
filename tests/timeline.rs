#![forbid(unsafe_code)]
use affectation::timeline::{base_range, group_columns, Column, ColumnGroup, MAX_COLUMNS};
use affectation::{bar_position, build_timeline, FixedClock, Granularity, TimelineRequest};
use chrono::{Duration, NaiveDate};

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

const ALL: [Granularity; 4] = [
    Granularity::Day,
    Granularity::Week,
    Granularity::Month,
    Granularity::Quarter,
];

fn labels(columns: &[Column]) -> String {
    columns
        .iter()
        .map(Column::label)
        .collect::<Vec<_>>()
        .join(" ")
}

#[test]
fn month_view_default_range() {
    let today = d("2024-06-15");
    let timeline = build_timeline(TimelineRequest::new(Granularity::Month, today));

    assert_eq!(timeline.range_start, d("2024-04-01"));
    assert_eq!(timeline.range_end, d("2024-12-31"));
    assert_eq!(timeline.columns.first().unwrap().start, d("2024-04-01"));
    insta::assert_snapshot!(labels(&timeline.columns), @"Apr May Jun Jul Aug Sep Oct Nov Dec Jan");
    assert_eq!(
        timeline.group_headers(),
        vec![
            ColumnGroup {
                label: "2024".into(),
                start: d("2024-04-01"),
                span: 9
            },
            ColumnGroup {
                label: "2025".into(),
                start: d("2025-01-01"),
                span: 1
            },
        ]
    );
}

#[test]
fn coarse_views_add_one_bucket_after_range_end() {
    let today = d("2024-06-15");

    let month = build_timeline(TimelineRequest::new(Granularity::Month, today));
    let last = month.columns.last().unwrap();
    assert_eq!((last.start, last.end), (d("2025-01-01"), d("2025-01-31")));
    assert!(last.start > month.range_end);
    assert!(month.columns[month.columns.len() - 2].contains(month.range_end));

    for g in [Granularity::Week, Granularity::Quarter] {
        let timeline = build_timeline(TimelineRequest::new(g, today));
        let n = timeline.columns.len();
        assert!(timeline.columns[n - 1].start > timeline.range_end, "{g}");
        assert!(timeline.columns[n - 2].contains(timeline.range_end), "{g}");
    }

    // la vue jour s'arrête sur le jour de fin
    let day = build_timeline(TimelineRequest::new(Granularity::Day, today));
    assert_eq!(day.columns.last().unwrap().start, day.range_end);
}

#[test]
fn month_look_ahead_beyond_year_end() {
    // today + 6 mois dépasse le 31 décembre
    let timeline = build_timeline(TimelineRequest::new(Granularity::Month, d("2024-09-10")));
    assert_eq!(timeline.range_start, d("2024-07-01"));
    assert_eq!(timeline.range_end, d("2025-03-10"));
    assert_eq!(timeline.columns.last().unwrap().start, d("2025-04-01"));
}

#[test]
fn day_view_default_range() {
    // 2024-06-15 est un samedi
    let timeline = build_timeline(TimelineRequest::new(Granularity::Day, d("2024-06-15")));
    assert_eq!(timeline.range_start, d("2024-06-03"));
    assert_eq!(timeline.range_end, d("2024-08-14"));
    assert_eq!(timeline.columns.len(), 73);
    assert_eq!(timeline.columns[0].label(), "3");

    let groups: Vec<(String, usize)> = timeline
        .group_headers()
        .into_iter()
        .map(|g| (g.label, g.span))
        .collect();
    assert_eq!(
        groups,
        vec![
            ("Jun 2024".to_string(), 28),
            ("Jul 2024".to_string(), 31),
            ("Aug 2024".to_string(), 14),
        ]
    );
}

#[test]
fn week_view_default_range() {
    let timeline = build_timeline(TimelineRequest::new(Granularity::Week, d("2024-06-15")));
    assert_eq!(timeline.range_start, d("2024-05-13"));
    assert_eq!(timeline.range_end, d("2024-09-07"));
    assert_eq!(timeline.columns.len(), 18);
    assert_eq!(timeline.columns[0].label(), "W20");
    assert_eq!(timeline.columns.last().unwrap().start, d("2024-09-09"));
    assert!(timeline.columns.iter().all(|c| c.width_in_days() == 7));
}

#[test]
fn quarter_view_default_range() {
    let timeline = build_timeline(TimelineRequest::new(Granularity::Quarter, d("2024-06-15")));
    assert_eq!(timeline.range_start, d("2023-10-01"));
    assert_eq!(timeline.range_end, d("2027-06-15"));
    assert_eq!(timeline.columns.len(), 16);
    insta::assert_snapshot!(
        labels(&timeline.columns[..6]),
        @"Q4 Q1 Q2 Q3 Q4 Q1"
    );
    assert_eq!(timeline.columns[1].width_in_days(), 91);
    assert_eq!(timeline.columns[0].group_label(), "2023");
}

#[test]
fn zero_offset_is_the_default_range() {
    let today = d("2024-06-15");
    for g in ALL {
        let default = build_timeline(TimelineRequest::new(g, today));
        let zero = build_timeline(TimelineRequest::new(g, today).with_offset(0));
        assert_eq!(default, zero);
    }
}

#[test]
fn negative_offset_moves_only_the_start() {
    let today = d("2024-06-15");
    let (start0, end0) = base_range(Granularity::Month, today, 0);
    let (start, end) = base_range(Granularity::Month, today, -1);
    assert_eq!(end, end0);
    assert_eq!(start0, d("2024-04-01"));
    assert_eq!(start, d("2024-01-01"));

    let (start, end) = base_range(Granularity::Day, today, -2);
    assert_eq!(start, d("2024-05-20"));
    assert_eq!(end, d("2024-08-14"));

    let (start, _) = base_range(Granularity::Week, today, -1);
    assert_eq!(start, d("2024-04-15"));

    let (start, _) = base_range(Granularity::Quarter, today, -1);
    assert_eq!(start, d("2023-04-01"));
}

#[test]
fn positive_offset_moves_only_the_end() {
    let today = d("2024-06-15");
    let (start, end) = base_range(Granularity::Month, today, 1);
    assert_eq!(start, d("2024-04-01"));
    assert_eq!(end, d("2025-03-31"));

    let (start, end) = base_range(Granularity::Week, today, 2);
    assert_eq!(start, d("2024-05-13"));
    assert_eq!(end, d("2024-11-02"));
}

#[test]
fn data_extent_extends_both_sides() {
    let today = d("2024-06-15");
    let request = TimelineRequest::new(Granularity::Week, today)
        .with_data_extent(Some((d("2024-01-10"), d("2025-02-20"))));
    let timeline = build_timeline(request);

    // 2024-01-10 est un mercredi : début aligné sur le lundi
    assert_eq!(timeline.range_start, d("2024-01-08"));
    assert_eq!(timeline.range_end, d("2025-02-20"));
    let n = timeline.columns.len();
    assert!(timeline.columns[n - 2].contains(d("2025-02-20")));
    assert_eq!(timeline.columns[n - 2].start, d("2025-02-17"));
    assert_eq!(timeline.columns[n - 1].start, d("2025-02-24"));
}

#[test]
fn data_inside_default_range_changes_nothing() {
    let today = d("2024-06-15");
    let plain = build_timeline(TimelineRequest::new(Granularity::Month, today));
    let with_data = build_timeline(
        TimelineRequest::new(Granularity::Month, today)
            .with_data_extent(Some((d("2024-05-01"), d("2024-07-01")))),
    );
    assert_eq!(plain, with_data);
}

#[test]
fn columns_cover_data_and_are_contiguous() {
    let today = d("2024-06-15");
    let extents = [
        (d("2019-02-27"), d("2024-06-20")),
        (d("2024-06-01"), d("2031-11-30")),
        (d("2020-12-31"), d("2030-01-01")),
    ];
    for g in ALL {
        for (min, max) in extents {
            for offset in [-3, 0, 2] {
                let timeline = build_timeline(
                    TimelineRequest::new(g, today)
                        .with_offset(offset)
                        .with_data_extent(Some((min, max))),
                );
                let first = timeline.columns.first().unwrap();
                let last = timeline.columns.last().unwrap();
                assert!(first.start <= min, "{g} {offset}: {} > {min}", first.start);
                assert!(last.end >= max, "{g} {offset}: {} < {max}", last.end);
                for pair in timeline.columns.windows(2) {
                    assert_eq!(pair[0].end + Duration::days(1), pair[1].start);
                    assert_eq!(g.next_bucket(pair[0].start), Some(pair[1].start));
                }
            }
        }
    }
}

#[test]
fn month_widths_follow_the_calendar() {
    let timeline = build_timeline(
        TimelineRequest::new(Granularity::Month, d("2024-03-15"))
            .with_data_extent(Some((d("2024-01-15"), d("2024-01-20")))),
    );
    let widths: Vec<i64> = timeline
        .columns
        .iter()
        .take(4)
        .map(Column::width_in_days)
        .collect();
    assert_eq!(widths, vec![31, 29, 31, 30]);
}

#[test]
fn today_marker() {
    let today = d("2024-06-15");
    for g in ALL {
        let timeline = build_timeline(TimelineRequest::new(g, today));
        let hits: Vec<&Column> = timeline.columns.iter().filter(|c| c.is_today(today)).collect();
        assert_eq!(hits.len(), 1, "{g}");
        assert!(hits[0].contains(today));
        assert_eq!(timeline.today_column(today).map(|i| timeline.columns[i]), Some(*hits[0]));
    }
}

#[test]
fn bar_position_uses_day_density() {
    let timeline = build_timeline(TimelineRequest::new(Granularity::Day, d("2024-06-15")));
    let origin = timeline.columns[0].start;

    let pos = bar_position(origin, origin + Duration::days(2), &timeline.columns, 10.0);
    assert_eq!(pos.left, 0.0);
    assert_eq!(pos.width, 30.0);

    let day = origin + Duration::days(5);
    let pos = bar_position(day, day, &timeline.columns, 10.0);
    assert_eq!(pos.left, 50.0);
    assert_eq!(pos.width, 10.0);
}

#[test]
fn short_bars_keep_a_minimum_width() {
    let timeline = build_timeline(TimelineRequest::new(Granularity::Quarter, d("2024-06-15")));
    let day = d("2024-06-15");
    let pos = bar_position(day, day, &timeline.columns, 40.0);
    assert_eq!(pos.width, 8.0);
    assert!(pos.left > 0.0);

    let wide = timeline.bar_position(day, day, 40.0, 2.0);
    assert!(wide.width < 8.0 && wide.width >= 2.0);
}

#[test]
fn groups_merge_consecutive_labels_only() {
    let timeline = build_timeline(TimelineRequest::new(Granularity::Quarter, d("2024-06-15")));
    let groups = group_columns(&timeline.columns);
    let spans: Vec<(String, usize)> = groups.into_iter().map(|g| (g.label, g.span)).collect();
    assert_eq!(
        spans,
        vec![
            ("2023".to_string(), 1),
            ("2024".to_string(), 4),
            ("2025".to_string(), 4),
            ("2026".to_string(), 4),
            ("2027".to_string(), 3),
        ]
    );
}

#[test]
fn granularity_parses_from_cli_strings() {
    assert_eq!("Month".parse::<Granularity>().unwrap(), Granularity::Month);
    assert_eq!("q".parse::<Granularity>().unwrap(), Granularity::Quarter);
    assert!("year".parse::<Granularity>().is_err());
    assert_eq!(Granularity::Week.to_string(), "week");
}

#[test]
fn extreme_offsets_saturate_without_panicking() {
    let today = d("2024-06-15");
    for g in ALL {
        for offset in [i32::MIN, i32::MIN + 1, -1_000_000, 1_000_000, i32::MAX] {
            let timeline = build_timeline(TimelineRequest::new(g, today).with_offset(offset));
            assert!(!timeline.columns.is_empty(), "{g} {offset}");
            assert!(timeline.columns.len() <= MAX_COLUMNS, "{g} {offset}");
            for pair in timeline.columns.windows(2) {
                assert_eq!(g.next_bucket(pair[0].start), Some(pair[1].start));
            }
        }
    }
}

#[test]
fn request_reads_today_from_the_clock() {
    let clock = FixedClock(d("2024-06-15"));
    let request = TimelineRequest::from_clock(Granularity::Month, &clock);
    assert_eq!(request, TimelineRequest::new(Granularity::Month, d("2024-06-15")));
    assert_eq!(build_timeline(request).range_start, d("2024-04-01"));
}
