use crate::{
    foundation::error::StoryboardResult, foundation::math::Fnv1a64, timeline::model::Timeline,
};

/// 128-bit digest of a timeline, built from two independently seeded FNV lanes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimelineFingerprint {
    pub hi: u64,
    pub lo: u64,
}

impl std::fmt::Display for TimelineFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}{:016x}", self.hi, self.lo)
    }
}

/// Stable digest of everything a renderer would read from `timeline`.
///
/// Object keys are visited in sorted order, so the digest does not depend on field order
/// in the serialized form.
pub fn fingerprint(timeline: &Timeline) -> StoryboardResult<TimelineFingerprint> {
    let value = serde_json::to_value(timeline)?;
    let mut a = Fnv1a64::new_default();
    let mut b = Fnv1a64::new(0x9ae1_6a3b_2f90_404f);
    write_value(&mut a, &mut b, &value);
    Ok(TimelineFingerprint {
        hi: a.finish(),
        lo: b.finish(),
    })
}

fn write_value(a: &mut Fnv1a64, b: &mut Fnv1a64, v: &serde_json::Value) {
    match v {
        serde_json::Value::Null => tag(a, b, 0),
        serde_json::Value::Bool(x) => {
            tag(a, b, 1);
            tag(a, b, u8::from(*x));
        }
        serde_json::Value::Number(n) => {
            tag(a, b, 2);
            match n.as_f64() {
                Some(f) => {
                    a.write_f64(f);
                    b.write_f64(f);
                }
                None => write_str(a, b, &n.to_string()),
            }
        }
        serde_json::Value::String(s) => {
            tag(a, b, 3);
            write_str(a, b, s);
        }
        serde_json::Value::Array(items) => {
            tag(a, b, 4);
            write_len(a, b, items.len());
            for item in items {
                write_value(a, b, item);
            }
        }
        serde_json::Value::Object(map) => {
            tag(a, b, 5);
            let mut keys = map.keys().collect::<Vec<_>>();
            keys.sort();
            write_len(a, b, keys.len());
            for k in keys {
                write_str(a, b, k);
                write_value(a, b, &map[k]);
            }
        }
    }
}

fn tag(a: &mut Fnv1a64, b: &mut Fnv1a64, v: u8) {
    a.write_u8(v);
    b.write_u8(v);
}

fn write_len(a: &mut Fnv1a64, b: &mut Fnv1a64, n: usize) {
    a.write_u64(n as u64);
    b.write_u64(n as u64);
}

fn write_str(a: &mut Fnv1a64, b: &mut Fnv1a64, s: &str) {
    a.write_str(s);
    b.write_str(s);
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/fingerprint.rs"]
mod tests;
