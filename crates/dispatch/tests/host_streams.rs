//! crates/dispatch/tests/host_streams.rs
//! Interception of the host runtime's output and error text streams.

use dispatch::{Dispatcher, WARNING_BANNER};
use registry::MessageRegistry;
use sink::{CaptureSink, HostStatus};

fn dispatcher() -> Dispatcher<CaptureSink> {
    Dispatcher::new(MessageRegistry::new(), CaptureSink::new())
}

#[test]
fn host_out_is_forwarded_line_by_line() {
    let mut d = dispatcher();

    let status = d.receive_host_out("tracking started\nstep 1\nstep 2\n");

    assert_eq!(status, HostStatus::ACCEPTED);
    let lines = d.sink().lines();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "[Host-1]  tracking started");
    assert_eq!(lines[2], "[Host-1]  step 2");
}

#[test]
fn host_out_respects_the_host_threshold() {
    let mut d = dispatcher();
    d.registry_mut().set_level("Host", 0);

    let status = d.receive_host_out("silenced\n");

    assert_eq!(status, HostStatus::ACCEPTED);
    assert!(d.sink().is_empty());
}

#[test]
fn host_err_goes_through_the_warning_banner() {
    let mut d = dispatcher();

    let status = d.receive_host_err("bad track status\n");

    assert_eq!(status, HostStatus::ACCEPTED);
    let lines = d.sink().lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0], format!("{WARNING_BANNER}bad track status"));
}

#[test]
fn host_err_is_silent_at_warning_level_zero() {
    let mut d = dispatcher();
    d.registry_mut().set_level("Warning", 0);

    let status = d.receive_host_err("dropped\n");

    assert_eq!(status, HostStatus::ACCEPTED);
    assert!(d.sink().is_empty());
}

#[test]
fn forwarding_toggle_drops_both_streams() {
    let mut d = dispatcher();
    d.set_host_forwarding(false);

    assert_eq!(d.receive_host_out("out\n"), HostStatus::ACCEPTED);
    assert_eq!(d.receive_host_err("err\n"), HostStatus::ACCEPTED);
    assert!(d.sink().is_empty());

    d.set_host_forwarding(true);
    assert!(d.host_forwarding());
    d.receive_host_out("back on\n");
    assert_eq!(d.sink().len(), 1);
}

#[test]
fn empty_text_is_accepted_without_writes() {
    let mut d = dispatcher();
    assert_eq!(d.receive_host_out(""), HostStatus::ACCEPTED);
    assert_eq!(d.receive_host_err(""), HostStatus::ACCEPTED);
    assert!(d.sink().is_empty());
}
