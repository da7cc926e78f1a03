// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! End-to-end transport loading scenarios across the public API:
//! scoping, built-in UDPv4 resolution, property-set lifecycle, and the
//! external-library failure paths.

use hdds_transport_plugin::diag::{Level, MemorySink};
use hdds_transport_plugin::plugin::{load, LoadError, Transport};
use hdds_transport_plugin::properties::PropertyStore;
use hdds_transport_plugin::transport::udpv4::SOCKET_BUFFER_SIZE_DEFAULT;
use hdds_transport_plugin::{TransportProperties, UdpV4Properties};

fn store(pairs: &[(&str, &str)]) -> PropertyStore {
    pairs.iter().copied().collect()
}

#[test]
fn scoped_view_contains_only_prefixed_entries() {
    let full = store(&[("UDPv4.send_ping", "1"), ("Other.x", "2")]);
    let scoped = full.scoped("UDPv4");

    assert_eq!(scoped.len(), 1);
    assert_eq!(scoped.get("send_ping"), Some("1"));
    assert_eq!(scoped.get("Other.x"), None);
    assert_eq!(scoped.get("x"), None);
}

#[test]
fn builtin_udpv4_with_defaults_emits_nothing() {
    let sink = MemorySink::new();
    let transport = load("UDPv4", &PropertyStore::new(), &sink).expect("load UDPv4");

    let Transport::BuiltinUdpV4(props) = transport else {
        panic!("UDPv4 must be the built-in backend");
    };
    assert_eq!(*props, UdpV4Properties::default());
    assert!(sink.records().iter().all(|r| r.level < Level::Warning));
}

#[test]
fn builtin_udpv4_recovers_from_bad_buffer_size() {
    let sink = MemorySink::new();
    let transport = load(
        "UDPv4",
        &store(&[("UDPv4.send_socket_buffer_size", "abc")]),
        &sink,
    )
    .expect("bad scalars are recoverable");

    let Transport::BuiltinUdpV4(props) = transport else {
        panic!("UDPv4 must be the built-in backend");
    };
    assert_eq!(props.send_socket_buffer_size, SOCKET_BUFFER_SIZE_DEFAULT);

    let warnings = sink.warnings();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].message.contains("UDPv4.send_socket_buffer_size"));
}

#[test]
fn builtin_udpv4_resolves_interface_list_from_scoped_namespace() {
    let sink = MemorySink::new();
    let transport = load(
        "UDPv4",
        &store(&[("UDPv4.parent.allow_interfaces_list", "eth0")]),
        &sink,
    )
    .expect("load UDPv4");

    let Transport::BuiltinUdpV4(props) = transport else {
        panic!("UDPv4 must be the built-in backend");
    };
    assert_eq!(props.parent.allow_interfaces, vec!["eth0".to_string()]);
}

#[test]
fn missing_create_function_fails_without_loading() {
    let sink = MemorySink::new();
    let err = load(
        "Foo",
        &store(&[("Foo.library", "/nonexistent/libfoo.so")]),
        &sink,
    )
    .expect_err("create_function is mandatory");

    assert_eq!(
        err,
        LoadError::MissingProperty("Foo.create_function".to_string())
    );
    assert!(err.is_configuration_error());
    // Exactly one hard-failure record, and it names the missing key -- no
    // library-open error means no load was attempted.
    let records = sink.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].level, Level::Error);
    assert!(records[0].message.contains("Foo.create_function"));
}

#[cfg(unix)]
#[test]
fn garbage_library_file_is_a_load_error_not_a_crash() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().expect("tempfile");
    file.write_all(b"definitely not a shared object")
        .expect("write garbage");
    let path = file.path().to_string_lossy().into_owned();

    let sink = MemorySink::new();
    let err = load(
        "Foo",
        &store(&[
            ("Foo.library", path.as_str()),
            ("Foo.create_function", "make_foo_transport"),
        ]),
        &sink,
    )
    .expect_err("garbage file cannot load");

    match &err {
        LoadError::LibraryOpen { library, .. } => assert_eq!(*library, path),
        other => panic!("expected LibraryOpen, got {other:?}"),
    }
    assert!(!err.is_configuration_error());
}

#[cfg(target_os = "linux")]
#[test]
fn missing_symbol_distinguishes_misdeployed_from_misconfigured() {
    let sink = MemorySink::new();
    let err = load(
        "Foo",
        &store(&[
            ("Foo.library", "libc.so.6"),
            ("Foo.create_function", "hdds_no_such_factory_symbol"),
        ]),
        &sink,
    )
    .expect_err("symbol cannot resolve");

    match &err {
        LoadError::SymbolResolve { library, symbol, .. } => {
            assert_eq!(library, "libc.so.6");
            assert_eq!(symbol, "hdds_no_such_factory_symbol");
        }
        other => panic!("expected SymbolResolve, got {other:?}"),
    }
    assert!(!err.is_configuration_error());
}

#[test]
fn property_set_copy_finalize_lifecycle() {
    let src = TransportProperties {
        classid: 1,
        address_bit_count: 32,
        properties_bitmap: 0,
        gather_send_buffer_count_max: 3,
        message_size_max: 9216,
        allow_interfaces: vec!["eth0".into(), "eth1".into(), "wlan0".into()],
        deny_interfaces: Vec::new(),
        allow_multicast_interfaces: Vec::new(),
        deny_multicast_interfaces: Vec::new(),
    };

    let mut copy = TransportProperties::default();
    copy.copy_from(&src);

    // Deep-equal, storage-disjoint.
    assert_eq!(copy.allow_interfaces, src.allow_interfaces);
    for (a, b) in copy.allow_interfaces.iter().zip(src.allow_interfaces.iter()) {
        assert_ne!(a.as_ptr(), b.as_ptr());
    }
    assert!(copy.deny_interfaces.is_empty());

    copy.finalize();
    assert_eq!(copy.allow_interfaces.len(), 0);
    assert!(copy.is_finalized());

    // Second finalize is a no-op.
    let snapshot = copy.clone();
    copy.finalize();
    assert_eq!(copy, snapshot);

    // Source untouched by the copy's teardown.
    assert_eq!(src.allow_interfaces.len(), 3);
}
