use std::borrow::Borrow;
use std::collections::BTreeSet;
use std::collections::HashMap;

use od_primitives::Int48;
use od_primitives::OctetString;
use od_primitives::Real32;
use od_primitives::TransparentWrapper;
use od_primitives::UInt24;
use od_primitives::Unknown;
use od_primitives::Value;
use od_primitives::VisibleString;

fn payload_len(bytes: impl AsRef<OctetString>) -> usize {
	bytes.as_ref().len()
}

#[test]
fn construction_paths_compare_equal() {
	let payload = VisibleString::from("device");
	let converted: Value<VisibleString> = payload.clone().into();
	let moved = Value::new(payload.clone());
	let copied = moved.clone();
	let mut assigned = Value::<VisibleString>::default();
	assigned.set_value(payload.clone());

	assert_eq!(converted, moved);
	assert_eq!(moved, copied);
	assert_eq!(copied, assigned);
	assert_eq!(assigned.get_value(), payload);
}

#[test]
fn assignment_replaces_whole_payload() {
	let mut bytes = Value::new(vec![1u8, 2, 3, 4]);
	bytes.set_value(vec![7]);
	assert_eq!(bytes.value(), &vec![7]);

	bytes = Value::new(Vec::new());
	assert!(bytes.value().is_empty());
}

#[test]
fn ordering_delegates_to_payload() {
	assert!(Value::new(UInt24::new(1)) < Value::new(UInt24::new(2)));
	assert!(Value::new(-5i8) < Value::new(3i8));
	assert!(Value::new(String::from("a")) < Value::new(String::from("b")));
	assert!(Value::new(1.5 as Real32) > Value::new(-0.5));
	assert_ne!(Value::new(f32::NAN), Value::new(f32::NAN));
}

#[test]
fn usable_where_payload_reference_is_expected() {
	let bytes = Value::new(vec![0xdeu8, 0xad]);
	assert_eq!(payload_len(&bytes), 2);
	assert_eq!(payload_len(bytes), 2);
}

#[test]
fn borrow_allows_lookup_by_payload() {
	let mut names: HashMap<Value<UInt24>, &str> = HashMap::new();
	names.insert(Value::new(UInt24::new(0x1000)), "device type");
	assert_eq!(names.get(&UInt24::new(0x1000)), Some(&"device type"));

	let set: BTreeSet<Value<Int48>> = [Int48::new(3), Int48::new(-3)]
		.into_iter()
		.map(Value::from)
		.collect();
	let first = set.iter().next().unwrap();
	assert_eq!(<Value<Int48> as Borrow<Int48>>::borrow(first).get(), -3);
}

#[test]
fn value_mut_and_as_mut_edit_in_place() {
	let mut counter = Value::new(UInt24::new(1));
	*counter.value_mut().data_mut() += 1;
	let next = counter.value().get() * 10;
	AsMut::<UInt24>::as_mut(&mut counter).set(next);
	assert_eq!(counter.into_inner().get(), 20);
}

#[test]
fn transparent_wrapper_casts_slices() {
	let raw = [UInt24::new(1), UInt24::new(2)];
	let wrapped: &[Value<UInt24>] = Value::wrap_slice(&raw);
	assert_eq!(wrapped[1], Value::new(UInt24::new(2)));

	let peeled: &[UInt24] = Value::peel_slice(wrapped);
	assert_eq!(peeled, &raw);
}

#[test]
fn unknown_values_are_vacuously_equal() {
	let a = Value::new(Unknown);
	let b = Value::<Unknown>::default();
	assert_eq!(a, b);
	assert_eq!(std::mem::size_of_val(&a), 0);
}
