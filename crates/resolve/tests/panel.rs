//! End-to-end panel flows: decode, lint, resolve, materialize.
//!
//! These tests drive the public surface the way the rendering and
//! dispatch layers do: parse a panel document, build one resolver over
//! its template map, then read effective values per button.

use pretty_assertions::assert_eq;
use switchboard_resolve::Resolver;
use switchboard_schema::{ConfigWarning, Defaults, PanelConfig};

fn parse(input: &str) -> PanelConfig {
	PanelConfig::parse(input).unwrap()
}

#[test]
fn test_template_inheritance_with_expansion() {
	let panel = parse(
		r#"{
			"templates": {
				"ParentA": {"set": {"ip": "192.168.1.64"}},
				"ParentB": {"request": {"method": "GET", "url": "http://192.168.1.64:1234/README.md"}}
			},
			"buttons": [{
				"is": "ParentA",
				"set": {"file": "README"},
				"request": {"method": "GET", "url": "http://${ip}:1234/${file}.md"}
			}]
		}"#,
	);
	let defaults = Defaults::new();
	let resolver = Resolver::new(&panel.templates, &defaults);

	let request = resolver.materialize_request(&panel.buttons[0]).unwrap();
	assert_eq!(request.method, "GET");
	assert_eq!(
		request.url.as_deref(),
		Some("http://192.168.1.64:1234/README.md"),
	);

	// The tokenized route produces the same URL ParentB spells out
	let canned = resolver
		.materialize_request(&panel.templates["ParentB"])
		.unwrap();
	assert_eq!(canned.url, request.url);
}

#[test]
fn test_materialization_reflects_latest_set_edits() {
	let panel = parse(
		r#"{"buttons": [{"set": {"file": "README"}, "request": {"url": "http://host/${file}.md"}}]}"#,
	);
	let defaults = Defaults::new();
	let resolver = Resolver::new(&panel.templates, &defaults);

	let mut button = panel.buttons[0].clone();
	let before = resolver.materialize_request(&button).unwrap();
	assert_eq!(before.url.as_deref(), Some("http://host/README.md"));

	// Dispatch re-materializes after the user edits an input field
	button.set.insert("file".to_string(), "CHANGELOG".to_string());
	let after = resolver.materialize_request(&button).unwrap();
	assert_eq!(after.url.as_deref(), Some("http://host/CHANGELOG.md"));
}

#[test]
fn test_shared_template_expands_per_button() {
	let panel = parse(
		r#"{
			"templates": {
				"Device": {"column": 2, "showOutput": true, "command": "status ${name}"}
			},
			"buttons": [
				{"title": "TV", "is": "Device", "set": {"name": "tv"}},
				{"title": "Amp", "is": "Device", "set": {"name": "amp"}, "column": 1}
			]
		}"#,
	);
	let defaults = Defaults::new();
	let resolver = Resolver::new(&panel.templates, &defaults);

	let tv = &panel.buttons[0];
	let amp = &panel.buttons[1];

	assert_eq!(resolver.command(tv).as_deref(), Some("status tv"));
	assert_eq!(resolver.command(amp).as_deref(), Some("status amp"));

	assert_eq!(resolver.column(tv), Some(2));
	assert_eq!(resolver.column(amp), Some(1));
	assert_eq!(resolver.show_output(tv), Some(true));
	assert_eq!(resolver.show_output(amp), Some(true));
}

#[test]
fn test_defaults_fill_the_last_tier() {
	let panel = parse(
		r#"{
			"templates": {"Base": {"set": {"ip": "192.168.1.64"}}},
			"buttons": [{"is": "Base", "request": {"url": "http://${ip}/x.${suffix}"}}]
		}"#,
	);
	// As seeded from SWITCHBOARD_SET_* at startup
	let defaults = Defaults::from_iter([("ip", "10.0.0.2"), ("suffix", "md")]);
	let resolver = Resolver::new(&panel.templates, &defaults);

	let request = resolver.materialize_request(&panel.buttons[0]).unwrap();
	assert_eq!(request.url.as_deref(), Some("http://192.168.1.64/x.md"));
}

#[test]
fn test_dangling_is_warns_but_still_renders() {
	let panel = parse(r#"{"buttons": [{"title": "Lost", "is": "Ghost"}]}"#);

	assert_eq!(
		panel.validate(),
		vec![ConfigWarning::UnknownTemplate {
			source: "Lost".to_string(),
			name: "Ghost".to_string(),
		}]
	);

	let defaults = Defaults::new();
	let resolver = Resolver::new(&panel.templates, &defaults);

	// Own values still resolve; inherited ones come up empty
	assert_eq!(resolver.title(&panel.buttons[0]).as_deref(), Some("Lost"));
	assert_eq!(resolver.command(&panel.buttons[0]), None);
}

#[test]
fn test_cyclic_templates_fail_safe() {
	let panel = parse(
		r#"{"templates": {"A": {"is": "B"}, "B": {"is": "A"}}, "buttons": [{"is": "A"}]}"#,
	);

	assert!(!panel.validate().is_empty());

	let defaults = Defaults::new();
	let resolver = Resolver::new(&panel.templates, &defaults);
	assert_eq!(resolver.title(&panel.buttons[0]), None);
}
