//! crates/dispatch/tests/dispatch_behavior.rs
//! End-to-end behavior of the guarded message writers and their macros.

use dispatch::{
    dump_value, sim_dec_tab, sim_inc_tab, sim_message, sim_message_cont, sim_message_dec,
    sim_message_inc, sim_reset_tab, Dispatcher, WARNING_BANNER,
};
use registry::MessageRegistry;
use sink::CaptureSink;

fn dispatcher(kind: &str, threshold: u8) -> Dispatcher<CaptureSink> {
    let mut registry = MessageRegistry::new();
    registry.register_type(kind, "test type", threshold);
    Dispatcher::new(registry, CaptureSink::new())
}

#[test]
fn threshold_gates_emission() -> std::io::Result<()> {
    let mut d = dispatcher("Physics", 5);

    sim_message!(d, "Physics", 0, "always at zero")?;
    sim_message!(d, "Physics", 5, "exactly at threshold")?;
    sim_message!(d, "Physics", 6, "just above")?;

    let lines = d.sink().lines();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "[Physics-0] always at zero");
    assert!(lines[1].starts_with("[Physics-5] "));
    Ok(())
}

#[test]
fn raising_the_level_reveals_suppressed_messages() -> std::io::Result<()> {
    let mut d = dispatcher("Core", 5);

    sim_message!(d, "Core", 7, "hidden")?;
    assert!(d.sink().is_empty());

    d.registry_mut().set_level("Core", 8);
    sim_message!(d, "Core", 7, "visible")?;
    assert_eq!(d.sink().len(), 1);
    assert!(d.sink().lines()[0].ends_with("visible"));
    Ok(())
}

#[test]
fn space_prefix_grows_with_level() -> std::io::Result<()> {
    let mut d = dispatcher("Core", 9);

    sim_message!(d, "Core", 0, "a")?;
    sim_message!(d, "Core", 2, "b")?;

    let lines = d.sink().lines();
    assert_eq!(lines[0], "[Core-0] a");
    assert_eq!(lines[1], "[Core-2]   b");
    Ok(())
}

#[test]
fn continuation_lines_carry_no_prefix() -> std::io::Result<()> {
    let mut d = dispatcher("Core", 5);

    sim_message!(d, "Core", 2, "head:")?;
    sim_message_cont!(d, "Core", 2, "  item {}", 1)?;
    sim_message_cont!(d, "Core", 9, "never shown")?;

    let lines = d.sink().lines();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1], "  item 1");
    Ok(())
}

#[test]
fn inc_dec_variants_nest_and_unnest() -> std::io::Result<()> {
    let mut d = dispatcher("Geometry", 9);

    sim_message_inc!(d, "Geometry", 1, "world {{")?;
    sim_message!(d, "Geometry", 1, "box")?;
    sim_message_dec!(d, "Geometry", 1, "}}")?;

    let lines = d.sink().lines();
    assert_eq!(lines[0], "[Geometry-1]  world {");
    assert_eq!(lines[1], "[Geometry-1]     box");
    assert_eq!(lines[2], "[Geometry-1]  }");
    assert_eq!(d.registry().tab(), "");
    Ok(())
}

#[test]
fn silent_tab_macros_respect_gating() -> std::io::Result<()> {
    let mut d = dispatcher("Core", 3);

    sim_inc_tab!(d, "Core", 9)?;
    assert_eq!(d.registry().tab(), "");

    sim_inc_tab!(d, "Core", 2)?;
    sim_inc_tab!(d, "Core", 2)?;
    assert_eq!(d.registry().tab(), "      ");

    sim_dec_tab!(d, "Core", 2)?;
    assert_eq!(d.registry().tab(), "   ");

    sim_reset_tab!(d);
    assert_eq!(d.registry().tab(), "");
    assert!(d.sink().is_empty());
    Ok(())
}

#[test]
fn unknown_type_warns_instead_of_emitting() -> std::io::Result<()> {
    let mut d = dispatcher("Core", 5);

    sim_message!(d, "Tracking", 1, "no such type")?;

    let lines = d.sink().lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with(WARNING_BANNER));
    assert!(lines[0].contains("'Tracking'"));
    assert!(!lines[0].contains("no such type"));
    Ok(())
}

#[test]
fn dump_value_names_the_expression() -> std::io::Result<()> {
    let mut d = dispatcher("ignored", 0);
    let half_life = 3.5;

    dump_value!(d, half_life)?;

    // "Core" is seeded by MessageRegistry::new at level 1.
    assert_eq!(d.sink().lines(), ["[Core-0] half_life = [ 3.5 ]"]);
    Ok(())
}

#[test]
fn print_info_lists_types_through_the_sink() -> std::io::Result<()> {
    let mut d = dispatcher("Geometry", 5);

    d.print_info()?;

    let lines = d.sink().lines();
    // Seeded Core/Warning/Host plus the registered type, after the header.
    assert_eq!(lines.len(), 5);
    assert!(lines[0].starts_with("Registered message types"));
    assert!(lines.iter().any(|l| l.contains("Geometry")));
    Ok(())
}

#[test]
fn into_parts_returns_registry_and_sink() {
    let d = dispatcher("Core", 5);
    let (registry, sink) = d.into_parts();
    assert!(registry.contains("Core"));
    assert!(sink.is_empty());
}
