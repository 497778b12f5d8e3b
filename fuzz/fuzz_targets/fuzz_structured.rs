#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::{arbitrary, fuzz_target};
use yamlish::{Number, Value, encode};

const MAX_DEPTH: usize = 8;
const MAX_ARRAY_SIZE: usize = 20;
const MAX_MAPPING_SIZE: usize = 20;

#[derive(Arbitrary, Debug)]
struct FuzzValue {
    choice: u8,
}

impl FuzzValue {
    fn to_value(&self, u: &mut arbitrary::Unstructured, depth: usize) -> arbitrary::Result<Value> {
        if depth >= MAX_DEPTH {
            return Ok(Value::Null);
        }

        Ok(match self.choice % 10 {
            0 => Value::Null,
            1 => Value::Bool(u.arbitrary()?),
            2 => Value::Number(Number::I64(u.arbitrary()?)),
            3 => {
                let f: f64 = u.arbitrary()?;
                Value::from(f)
            }
            4 => Value::String(u.arbitrary()?),
            5..=7 => {
                let size = u.int_in_range(0..=MAX_ARRAY_SIZE)?;
                let mut items = Vec::with_capacity(size);
                for _ in 0..size {
                    let fv: FuzzValue = u.arbitrary()?;
                    items.push(fv.to_value(u, depth + 1)?);
                }
                Value::Array(items)
            }
            _ => {
                let size = u.int_in_range(0..=MAX_MAPPING_SIZE)?;
                let mut entries = Vec::with_capacity(size);
                for _ in 0..size {
                    let key: String = u.arbitrary()?;
                    let fv: FuzzValue = u.arbitrary()?;
                    entries.push((key, fv.to_value(u, depth + 1)?));
                }
                Value::Mapping(entries)
            }
        })
    }
}

fuzz_target!(|data: &[u8]| {
    let mut u = arbitrary::Unstructured::new(data);

    if let Ok(fv) = u.arbitrary::<FuzzValue>() {
        if let Ok(value) = fv.to_value(&mut u, 0) {
            let out = encode(&value);
            assert!(!out.ends_with('\n'), "trailing newline: {:?}", out);
            assert_eq!(out, encode(&value), "non-deterministic output");
            if value.is_scalar() {
                assert!(!out.contains('\n'), "scalar spilled lines: {:?}", out);
            }
        }
    }
});
