//! Integration tests for epi-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv_writer::{CsvWriter, DAY_STATS_FILE};
    use crate::row::DayStatsRow;
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn row(day: u32) -> DayStatsRow {
        DayStatsRow {
            day,
            live_count:      1_000 - day,
            infected_count:  day * 2,
            dead_count:      day,
            isolation_count: day / 2,
            immune_count:    day * 3,
        }
    }

    #[test]
    fn csv_file_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join(DAY_STATS_FILE).exists());
    }

    #[test]
    fn csv_header_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(DAY_STATS_FILE)).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers,
            ["day", "live_count", "infected_count", "dead_count", "isolation_count", "immune_count"]
        );
    }

    #[test]
    fn csv_rows_written_in_order() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        for day in 0..3 {
            w.write_day(&row(day)).unwrap();
        }
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(DAY_STATS_FILE)).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[2][0], "2");   // day
        assert_eq!(&rows[2][1], "998"); // live_count
        assert_eq!(&rows[2][2], "4");   // infected_count
        assert_eq!(&rows[2][5], "6");   // immune_count
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn missing_directory_errors() {
        let dir = tmp();
        let missing = dir.path().join("does/not/exist");
        match CsvWriter::new(&missing) {
            Err(crate::OutputError::Create { path, .. }) => {
                assert_eq!(path, missing.join(DAY_STATS_FILE));
            }
            other => panic!("expected Create error, got {:?}", other.err()),
        }
    }
}

#[cfg(test)]
mod text_tests {
    use crate::row::DayStatsRow;
    use crate::text::TextReportWriter;
    use crate::writer::OutputWriter;

    #[test]
    fn header_and_aligned_rows() {
        let mut w = TextReportWriter::new(Vec::new()).unwrap();
        w.write_day(&DayStatsRow {
            day:             3,
            live_count:      10_000,
            infected_count:  12,
            dead_count:      0,
            isolation_count: 1,
            immune_count:    0,
        })
        .unwrap();
        w.finish().unwrap();

        let text = String::from_utf8(w.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "day, live_count, infected_count, dead_count, isolation_count, immune_count");
        assert_eq!(lines[1], "   3,    10000,       12,        0,        1,        0");
    }
}

#[cfg(test)]
mod observer_tests {
    use epi_core::DiseaseParameters;
    use epi_sim::{World, WorldObserver, WorldStat};

    use crate::row::DayStatsRow;
    use crate::text::TextReportWriter;
    use crate::writer::OutputWriter;
    use crate::{OutputError, OutputResult, StatsObserver};

    #[derive(Default)]
    struct VecWriter {
        rows:     Vec<DayStatsRow>,
        finishes: usize,
    }

    impl OutputWriter for VecWriter {
        fn write_day(&mut self, row: &DayStatsRow) -> OutputResult<()> {
            self.rows.push(*row);
            Ok(())
        }

        fn finish(&mut self) -> OutputResult<()> {
            self.finishes += 1;
            Ok(())
        }
    }

    struct FailingWriter;

    impl OutputWriter for FailingWriter {
        fn write_day(&mut self, _row: &DayStatsRow) -> OutputResult<()> {
            Err(OutputError::Io(std::io::Error::other("disk full")))
        }

        fn finish(&mut self) -> OutputResult<()> {
            Ok(())
        }
    }

    #[test]
    fn one_row_per_reported_day() {
        let params = DiseaseParameters { population_count: 2_000, start_infected: 10, ..Default::default() };
        let mut world = World::new(params, 42).unwrap();
        let mut obs = StatsObserver::new(VecWriter::default());
        let summary = world.run(&mut obs, Some(10_000));

        assert!(obs.take_error().is_none());
        assert_eq!(obs.rows_written() as u32, summary.days + 1);
        let writer = obs.into_writer();
        assert_eq!(writer.finishes, 1);
        assert_eq!(writer.rows[0].day, 0);
        assert_eq!(writer.rows.last().unwrap().infected_count, 0);
        for r in &writer.rows {
            assert_eq!(r.live_count + r.dead_count, 2_000);
        }
    }

    #[test]
    fn first_error_is_kept() {
        let mut obs = StatsObserver::new(FailingWriter);
        obs.on_day_stats(0, &WorldStat::default());
        obs.on_day_stats(1, &WorldStat::default());
        assert_eq!(obs.rows_written(), 0);
        assert!(matches!(obs.take_error(), Some(OutputError::Io(_))));
        assert!(obs.take_error().is_none());
    }

    #[test]
    fn text_report_through_observer() {
        let params = DiseaseParameters { population_count: 100, start_infected: 0, ..Default::default() };
        let mut world = World::new(params, 1).unwrap();
        let mut obs = StatsObserver::new(TextReportWriter::new(Vec::new()).unwrap());
        world.run(&mut obs, None);

        let text = String::from_utf8(obs.into_writer().into_inner()).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(text.ends_with("   0,      100,        0,        0,        0,        0\n"));
    }
}
