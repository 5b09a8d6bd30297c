use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use dataview_testkit::{parse_view, sorted_pairs};

use crate::view::{
	ChanDir, ChanValue, DataView, Encoder, FieldValue, FuncType, FuncValue, HostValue, Kind, Result, StructValue, ToValue, Type, Value, ViewError, ViewOptions,
	ZERO_VALUE, build_view, view, view_with, view_with_options,
};

fn inner_type() -> Type {
	Type::named("main.T", Type::Struct(Vec::new()))
}

fn record(a: i64) -> Value {
	Value::Struct(StructValue::named(
		"main.R",
		vec![
			FieldValue::new("A", Type::Int, Value::Int(a)),
			FieldValue::new(
				"B",
				inner_type(),
				Value::Struct(StructValue::named("main.T", vec![FieldValue::new("C", Type::String, Value::string("deep"))])),
			),
		],
	))
}

#[derive(Debug)]
struct FailingEncoder;

impl Encoder for FailingEncoder {
	fn encode(&self, _view: &DataView) -> Result<String> {
		Err(ViewError::Inaccessible {
			type_name: "encoder".to_owned(),
			reason: "always fails".to_owned(),
		})
	}
}

#[derive(Debug)]
struct Opaque;

impl HostValue for Opaque {
	fn type_name(&self) -> String {
		"main.conn".to_owned()
	}

	fn kind(&self) -> Kind {
		Kind::Struct
	}

	fn extract(&self) -> Result<Value> {
		Err(ViewError::Inaccessible {
			type_name: self.type_name(),
			reason: "closed".to_owned(),
		})
	}
}

/// Record whose `Next` field points back at itself.
#[derive(Debug)]
struct Node;

impl HostValue for Node {
	fn type_name(&self) -> String {
		"main.Node".to_owned()
	}

	fn kind(&self) -> Kind {
		Kind::Struct
	}

	fn extract(&self) -> Result<Value> {
		Ok(Value::Struct(StructValue::named(
			"main.Node",
			vec![FieldValue::new("Next", Type::ptr_to(node_type()), Value::Host(Arc::new(Node)))],
		)))
	}
}

fn node_type() -> Type {
	Type::named("main.Node", Type::Struct(Vec::new()))
}

/// Slice that contains itself.
#[derive(Debug)]
struct Nest;

impl HostValue for Nest {
	fn type_name(&self) -> String {
		"main.Nest".to_owned()
	}

	fn kind(&self) -> Kind {
		Kind::Slice
	}

	fn extract(&self) -> Result<Value> {
		Ok(Value::slice(Type::Interface, vec![Value::Host(Arc::new(Nest))]))
	}
}

#[test]
fn nil_describes_as_zero_value() {
	assert_eq!(view(&Value::Nil), r#"{"type":"nil","value":"nil"}"#);
	assert_eq!(build_view(&Value::Nil, &ViewOptions::default()), ZERO_VALUE);
}

#[test]
fn nil_pointer_chain_describes_as_zero_value() {
	let value = Value::ptr(Type::ptr_to(inner_type()), 0x10, Value::nil_ptr(inner_type()));
	assert_eq!(view(&value), r#"{"type":"nil","value":"nil"}"#);
}

#[test]
fn int_describes_with_type_and_value() {
	assert_eq!(view(&Value::Int(42)), r#"{"type":"int","value":"42"}"#);
}

#[test]
fn int_sequence_describes_flattened() {
	let value = Value::slice(Type::Int, vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
	assert_eq!(view(&value), r#"{"type":"[]int","value":"[1 2 3]"}"#);
}

#[test]
fn record_expands_one_level() {
	assert_eq!(
		view(&record(5)),
		r#"{"type":"main.R","fields":{"A":{"type":"int","value":"5"},"B":{"type":"main.T"}}}"#
	);
}

#[test]
fn pointer_to_pointer_to_record_is_transparent() {
	let ptr = Value::ptr(inner_type(), 0x20, record(5));
	let ptr_ptr = Value::ptr(Type::ptr_to(inner_type()), 0x28, ptr);
	assert_eq!(view(&ptr_ptr), view(&record(5)));
}

#[test]
fn repeated_calls_are_identical() {
	let value = record(7);
	let first = view(&value);
	for _ in 0..4 {
		assert_eq!(view(&value), first);
	}
}

#[test]
fn repeated_calls_yield_the_same_pair_set() {
	let mut scores = HashMap::new();
	for (idx, name) in ["ada", "bob", "cy", "dee", "eve"].into_iter().enumerate() {
		scores.insert(name.to_owned(), idx as isize);
	}
	let value = scores.to_value();

	let pairs = |encoded: String| {
		let json = parse_view(&encoded);
		assert_eq!(json["type"], "map[string]int");
		sorted_pairs(json["value"].as_str().expect("value is a string"))
	};
	let first = pairs(view(&value));
	assert_eq!(first.len(), 5);
	for _ in 0..4 {
		assert_eq!(pairs(view(&value)), first);
	}
}

#[test]
fn map_fields_compare_by_parsed_content() {
	let tags = Value::map(
		Type::String,
		Type::Int,
		vec![(Value::string("x"), Value::Int(1)), (Value::string("y"), Value::Int(2))],
	);
	let value = Value::Struct(StructValue::named("main.M", vec![FieldValue::new("Tags", Type::map_of(Type::String, Type::Int), tags)]));

	let decoded: DataView = serde_json::from_str(&view(&value)).expect("view decodes");
	let fields = decoded.fields.expect("record has fields");
	let tags = &fields["Tags"];
	assert_eq!(tags.ty.as_deref(), Some("map[string]int"));
	let rendered = tags.value.as_deref().expect("map has a value");
	assert!(rendered.contains("[x 1]"));
	assert!(rendered.contains("[y 2]"));
}

#[test]
fn opaque_kinds_describe_with_generic_value() {
	let chan = Value::Chan(ChanValue {
		dir: ChanDir::Recv,
		elem: Type::Int,
		addr: 0xc0ffee,
	});
	assert_eq!(view(&chan), r#"{"type":"<-chan int","value":"0xc0ffee"}"#);

	let func = Value::Func(FuncValue {
		sig: FuncType {
			params: vec![Type::Int],
			results: vec![Type::Bool],
			variadic: false,
		},
		addr: 0x4010,
	});
	assert_eq!(view(&func), r#"{"type":"func(int) bool","value":"0x4010"}"#);
}

#[test]
fn unreadable_record_host_describes_with_handle() {
	let value = Value::Host(Arc::new(Opaque));
	assert_eq!(view(&value), r#"{"type":"main.conn","value":"<main.conn Value>"}"#);
}

#[test]
fn cyclic_host_in_sequence_renders_nested_handle() {
	let value = Value::slice(Type::ptr_to(node_type()), vec![Value::Host(Arc::new(Node))]);
	assert_eq!(view(&value), r#"{"type":"[]*main.Node","value":"[{<main.Node Value>}]"}"#);
}

#[test]
fn cyclic_host_in_map_value_renders_handle() {
	let value = Value::map(Type::String, Type::Interface, vec![(Value::string("head"), Value::boxed(Value::Host(Arc::new(Node))))]);
	assert_eq!(view(&value), r#"{"type":"map[string]interface {}","value":"[[head <main.Node Value>]]"}"#);
}

#[test]
fn cyclic_host_record_expands_once() {
	assert_eq!(
		view(&Value::Host(Arc::new(Node))),
		r#"{"type":"main.Node","fields":{"Next":{"type":"*main.Node"}}}"#
	);
}

#[test]
fn self_containing_sequence_stops_splicing() {
	let json = parse_view(&view(&Value::Host(Arc::new(Nest))));
	assert_eq!(json["type"], "[]interface {}");
	let rendered = json["value"].as_str().expect("value is a string");
	assert!(rendered.ends_with("[<main.Nest Value>]]"), "{rendered}");
}

#[test]
fn empty_record_omits_fields_key() {
	let value = Value::Struct(StructValue::named("main.Empty", Vec::new()));
	assert_eq!(
		build_view(&value, &ViewOptions::default()),
		DataView::record("main.Empty", BTreeMap::new())
	);
	assert_eq!(view(&value), r#"{"type":"main.Empty"}"#);
}

#[test]
fn empty_string_omits_value_key() {
	assert_eq!(view(&Value::string("")), r#"{"type":"string"}"#);
}

#[test]
fn named_scalar_uses_defined_name() {
	let value = Value::named("main.Celsius", Value::Float64(36.6));
	assert_eq!(view(&value), r#"{"type":"main.Celsius","value":"36.6"}"#);
}

#[test]
fn encoding_failure_yields_empty_string() {
	assert_eq!(view_with(&Value::Int(1), &ViewOptions::default(), &FailingEncoder), "");
}

#[test]
fn output_always_decodes_into_the_schema() {
	let samples = vec![
		Value::Nil,
		Value::Bool(false),
		Value::Float64(0.5),
		Value::slice(Type::Interface, vec![Value::boxed(Value::Int(1)), Value::boxed(record(1))]),
		record(2),
		Value::Host(Arc::new(Opaque)),
	];
	for sample in &samples {
		let encoded = view(sample);
		let decoded: DataView = serde_json::from_str(&encoded).expect("view decodes into DataView");
		assert!(decoded.ty.is_some(), "every view has a type: {encoded}");
		assert!(decoded.value.is_none() || decoded.fields.is_none(), "value and fields are exclusive: {encoded}");
	}
}

#[test]
fn pretty_option_indents_output() {
	let rendered = view_with_options(&Value::Int(1), &ViewOptions::for_terminal());
	assert_eq!(rendered, "{\n  \"type\": \"int\",\n  \"value\": \"1\"\n}");
}

#[test]
fn views_can_be_built_concurrently() {
	let value = Arc::new(record(3));
	let expected = view(&value);
	let handles: Vec<_> = (0..4)
		.map(|_| {
			let value = Arc::clone(&value);
			std::thread::spawn(move || view(&value))
		})
		.collect();
	for handle in handles {
		assert_eq!(handle.join().expect("thread completes"), expected);
	}
}
