mod common;

use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::bounded;
use common::{finished, job_list, running, ManualClock};
use job_monitor::manager::hosts::HostTable;
use job_monitor::models::message::JobMessage;
use job_monitor::worker::worker::handle_message;
use job_monitor::{Column, JobMonitor, MonitorSettings, SortOrder};

#[test]
fn messages_drive_the_job_list() {
    let clock = ManualClock::at(0);
    let mut jobs = job_list(&clock);

    handle_message(&mut jobs, JobMessage::SetExpireDuration(2));
    handle_message(&mut jobs, JobMessage::Update(running(1)));
    handle_message(&mut jobs, JobMessage::Update(finished(2)));
    assert!(jobs.is_timer_active());

    clock.advance(2);
    handle_message(&mut jobs, JobMessage::ExpireTick);
    assert!(jobs.contains(1));
    assert!(!jobs.contains(2));

    handle_message(&mut jobs, JobMessage::SetFilePathParts(0));
    let (reply, response) = bounded(1);
    handle_message(
        &mut jobs,
        JobMessage::Snapshot {
            column: Column::Id,
            order: SortOrder::Ascending,
            reply,
        },
    );
    let snapshot = response.recv().unwrap();
    assert_eq!(snapshot.expire_duration, 2);
    assert_eq!(snapshot.file_path_parts, 0);
    assert_eq!(snapshot.rows.len(), 1);
    assert_eq!(snapshot.rows[0].cells[Column::Filename.index()], "file1.c");
    assert_eq!(snapshot.rows[0].cells[Column::Client.index()], "alpha");

    handle_message(&mut jobs, JobMessage::Clear);
    assert!(jobs.is_empty());
}

fn monitor(expire_duration: i64) -> JobMonitor {
    let mut hosts = HostTable::new();
    hosts.insert(1, "alpha");
    JobMonitor::start(MonitorSettings {
        hosts,
        expire_duration,
        file_path_parts: 2,
    })
}

#[test]
fn monitor_tracks_updates_over_the_channel() {
    let monitor = monitor(-1);
    for id in 1..=3 {
        monitor.update(running(id)).unwrap();
    }
    monitor.update(running(2).with_times(50, 40)).unwrap();
    monitor.update(finished(3)).unwrap();

    let snapshot = monitor.snapshot(Column::Id, SortOrder::Descending).unwrap();
    let ids: Vec<u32> = snapshot.rows.iter().map(|row| row.id).collect();
    assert_eq!(ids, [3, 2, 1]);
    assert_eq!(snapshot.rows[1].cells[Column::Real.index()], "50");
    assert_eq!(snapshot.rows[0].cells[Column::State.index()], "Finished");
    assert_eq!(snapshot.rows[0].cells[Column::Filename.index()], ".../module/file3.c");
    assert_eq!(snapshot.pending_expiry, 0);

    monitor.set_number_of_file_path_parts(-1).unwrap();
    let snapshot = monitor.snapshot(Column::Id, SortOrder::Ascending).unwrap();
    assert_eq!(snapshot.rows[0].cells[Column::Filename.index()], "/src/project/module/file1.c");

    monitor.clear().unwrap();
    assert!(monitor.snapshot(Column::Id, SortOrder::Ascending).unwrap().rows.is_empty());
    monitor.shutdown();
}

#[test]
fn monitor_removes_finished_jobs_at_once_with_zero_expiry() {
    let monitor = monitor(0);
    monitor.update(running(1)).unwrap();
    monitor.update(finished(1)).unwrap();
    monitor.update(running(2)).unwrap();

    let snapshot = monitor.snapshot(Column::Id, SortOrder::Ascending).unwrap();
    assert_eq!(snapshot.rows.iter().map(|row| row.id).collect::<Vec<_>>(), [2]);
}

#[test]
fn monitor_expires_finished_jobs_on_its_own_timer() {
    let monitor = monitor(1);
    monitor.update(running(1)).unwrap();
    monitor.update(finished(2)).unwrap();

    let snapshot = monitor.snapshot(Column::Id, SortOrder::Ascending).unwrap();
    assert_eq!(snapshot.rows.len(), 2);
    assert_eq!(snapshot.pending_expiry, 1);

    let deadline = Instant::now() + Duration::from_secs(10);
    loop {
        let snapshot = monitor.snapshot(Column::Id, SortOrder::Ascending).unwrap();
        if snapshot.pending_expiry == 0 {
            assert_eq!(snapshot.rows.iter().map(|row| row.id).collect::<Vec<_>>(), [1]);
            break;
        }
        assert!(Instant::now() < deadline, "finished job was never expired");
        thread::sleep(Duration::from_millis(100));
    }
}

#[test]
fn producers_can_post_messages_directly() {
    let monitor = monitor(-1);
    let sender = monitor.sender();
    let producer = thread::spawn(move || {
        for id in 10..20 {
            sender.send(JobMessage::Update(running(id))).unwrap();
        }
    });
    producer.join().unwrap();

    let snapshot = monitor.snapshot(Column::Id, SortOrder::Ascending).unwrap();
    assert_eq!(snapshot.rows.len(), 10);
    assert_eq!(snapshot.rows[0].id, 10);
}
