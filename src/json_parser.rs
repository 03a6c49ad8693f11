/*

    Provide utilities to parse scene JSON files for the sizer.

    The parser is somewhat robust, let <a> be integer or float type,
    in JSON file <a> can be given both in quotes (string) or as is.

    e.g. In JSON file both
    "FovY": "60" and "FovY": 60
    works as fovy: Float in source code

    Vector3 fields are accepted as "<a> <a> <a>" or [<a>, <a>, <a>],
    and position lists as one flat string "<a> <a> <a> <a> ..." or
    an array of Vector3s.

    @date: 2 Oct, 2025
    @author: bartu
*/

use std::fmt::{self};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Deserializer};
use serde::de::{self, Visitor, SeqAccess};

use crate::prelude::*;
use crate::scene::{SizerScene};
use crate::numeric::{Float, Quaternion, Vector3};

pub fn parse_scene_json<P: AsRef<Path>>(path: P) -> Result<SizerScene, Box<dyn std::error::Error>> {

    let span = tracing::span!(tracing::Level::INFO, "load_scene");
    let _enter = span.enter();

    // Open file
    let path = path.as_ref();
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    debug!("Reading file from {}", path.display());

    // Parse JSON into Scene
    let mut scene: SizerScene = serde_json::from_reader(reader)?;
    scene.setup_after_json();
    Ok(scene)
}

// A number that may have been written in quotes
#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(Float),
    Text(String),
}

impl NumberOrString {
    fn to_float(&self) -> Result<Float, String> {
        match self {
            NumberOrString::Number(x) => Ok(*x),
            NumberOrString::Text(s) => s.trim().parse::<Float>().map_err(|e| format!("Failed to parse float from '{s}': {e}")),
        }
    }
}

// Handles floats as string or number
pub(crate) fn deser_float<'de, D>(deserializer: D) -> Result<Float, D::Error>
where
    D: Deserializer<'de>,
{
    /*
        Deserialize float type given as either string or number in JSON
    */
    let s: serde_json::Value = Deserialize::deserialize(deserializer)?;
    match s {
        serde_json::Value::Number(n) => n.as_f64()
            .map(|v| v as Float)
            .ok_or_else(|| de::Error::custom("Invalid float")),
        serde_json::Value::String(s) => s.trim().parse::<Float>()
            .map_err(|_| de::Error::custom("Failed to parse float from string")),
        t => Err(de::Error::custom(format!("Expected float or string, found {t}"))),
    }
}

pub(crate) fn deser_opt_float<'de, D>(deserializer: D) -> Result<Option<Float>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: serde_json::Value = Deserialize::deserialize(deserializer)?;
    match s {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::String(s) if s.trim().is_empty() => Ok(None),
        other => deser_float(other).map(Some).map_err(de::Error::custom),
    }
}

pub(crate) fn deser_vec3<'de, D>(deserializer: D) -> Result<Vector3, D::Error>
where
    D: Deserializer<'de>,
{
    struct Vec3Visitor;

    impl<'de> Visitor<'de> for Vec3Visitor {
        type Value = Vector3;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a Vec3 as a string 'x y z' or an array [x, y, z]")
        }

        // Given "X Y Z"
        fn visit_str<E>(self, value: &str) -> Result<Vector3, E>
        where
            E: de::Error,
        {
            let [x, y, z] = parse_floats::<3>(value).map_err(de::Error::custom)?;
            Ok(Vector3::new(x, y, z))
        }

        // Given [X, Y, Z]
        fn visit_seq<A>(self, seq: A) -> Result<Vector3, A::Error>
        where
            A: SeqAccess<'de>,
        {
            let [x, y, z] = read_floats::<3, A>(seq)?;
            Ok(Vector3::new(x, y, z))
        }
    }

    deserializer.deserialize_any(Vec3Visitor)
}

/// Rotation given as "<angle in degrees> <axis x> <axis y> <axis z>"
pub(crate) fn deser_rotation<'de, D>(deserializer: D) -> Result<Quaternion, D::Error>
where
    D: Deserializer<'de>,
{
    struct RotationVisitor;

    impl<'de> Visitor<'de> for RotationVisitor {
        type Value = Quaternion;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a rotation as 'angle x y z' or [angle, x, y, z]")
        }

        fn visit_str<E>(self, value: &str) -> Result<Quaternion, E>
        where
            E: de::Error,
        {
            parse_floats::<4>(value).map(angle_axis_to_quat).map_err(de::Error::custom)
        }

        fn visit_seq<A>(self, seq: A) -> Result<Quaternion, A::Error>
        where
            A: SeqAccess<'de>,
        {
            read_floats::<4, A>(seq).map(angle_axis_to_quat)
        }
    }

    deserializer.deserialize_any(RotationVisitor)
}

fn angle_axis_to_quat([angle, x, y, z]: [Float; 4]) -> Quaternion {
    let axis = Vector3::new(x, y, z).normalize_or_zero();
    if axis == Vector3::ZERO {
        warn!("Rotation axis is zero, defaulting to identity rotation");
        return Quaternion::IDENTITY;
    }
    Quaternion::from_axis_angle(axis, angle.to_radians())
}

pub(crate) fn deser_pair<'de, D>(deserializer: D) -> Result<[u32; 2], D::Error>
where
    D: Deserializer<'de>,
{
    struct PairVisitor;

    impl<'de> Visitor<'de> for PairVisitor {
        type Value = [u32; 2];

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a pair as a string 'a b' or an array [a, b]")
        }

        fn visit_str<E>(self, value: &str) -> Result<[u32; 2], E>
        where
            E: de::Error,
        {
            let parts: Vec<&str> = value.split_whitespace().collect();
            if parts.len() != 2 {
                return Err(de::Error::custom(format!("Expected 2 values, got {}", parts.len())));
            }
            let a = parts[0].parse::<u32>().map_err(de::Error::custom)?;
            let b = parts[1].parse::<u32>().map_err(de::Error::custom)?;
            Ok([a, b])
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<[u32; 2], A::Error>
        where
            A: SeqAccess<'de>,
        {
            let a: u32 = seq
                .next_element()?
                .ok_or_else(|| de::Error::custom("Expected 2 elements in pair"))?;
            let b: u32 = seq
                .next_element()?
                .ok_or_else(|| de::Error::custom("Expected 2 elements in pair"))?;
            if seq.next_element::<u32>()?.is_some() {
                return Err(de::Error::custom("Expected only 2 elements in pair"));
            }
            Ok([a, b])
        }
    }

    deserializer.deserialize_any(PairVisitor)
}

pub(crate) fn deser_vecvec3<'de, D>(deserializer: D) -> Result<Vec<Vector3>, D::Error>
where
    D: Deserializer<'de>,
{
    struct VecVec3Visitor;

    impl<'de> Visitor<'de> for VecVec3Visitor {
        type Value = Vec<Vector3>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("positions as a flat string 'x y z x y z ...' or an array of Vec3")
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            parse_string_vecvec3(v).map_err(de::Error::custom)
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where
            A: SeqAccess<'de>,
        {
            #[derive(Deserialize)]
            struct Wrapper(#[serde(deserialize_with = "deser_vec3")] Vector3);

            let mut vec = Vec::with_capacity(seq.size_hint().unwrap_or(0));
            while let Some(Wrapper(v)) = seq.next_element()? {
                vec.push(v);
            }
            Ok(vec)
        }
    }

    deserializer.deserialize_any(VecVec3Visitor)
}

/// Parse a string like "0 0 0 1 0 0" into [(0,0,0), (1,0,0)]
pub fn parse_string_vecvec3(s: &str) -> Result<Vec<Vector3>, String> {
    let nums: Vec<Float> = s
        .split_whitespace()
        .map(|x| x.parse::<Float>().map_err(|e| e.to_string()))
        .collect::<Result<_, _>>()?;

    if nums.len() % 3 != 0 {
        return Err(format!("Input length {} not divisible by 3", nums.len()));
    }
    Ok(nums.chunks_exact(3).map(|c| Vector3::new(c[0], c[1], c[2])).collect())
}

/// Helper function: parse a string like "25 25 25" into exactly N floats
fn parse_floats<const N: usize>(s: &str) -> Result<[Float; N], String> {
    let parts: Vec<&str> = s.split_whitespace().collect();
    if parts.len() != N {
        return Err(format!("Expected {} values, got {}", N, parts.len()));
    }
    let mut out = [0.0; N];
    for (slot, part) in out.iter_mut().zip(parts) {
        *slot = part.parse::<Float>().map_err(|e| e.to_string())?;
    }
    Ok(out)
}

fn read_floats<'de, const N: usize, A>(mut seq: A) -> Result<[Float; N], A::Error>
where
    A: SeqAccess<'de>,
{
    let mut out = [0.0; N];
    for slot in out.iter_mut() {
        let item: NumberOrString = seq
            .next_element()?
            .ok_or_else(|| de::Error::custom(format!("Expected {N} elements in array")))?;
        *slot = item.to_float().map_err(de::Error::custom)?;
    }
    if seq.next_element::<NumberOrString>()?.is_some() {
        return Err(de::Error::custom(format!("Expected only {N} elements in array")));
    }
    Ok(out)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(deserialize_with = "deser_vec3")]
        v: Vector3,
        #[serde(deserialize_with = "deser_pair")]
        pair: [u32; 2],
        #[serde(deserialize_with = "deser_float")]
        f: Float,
    }

    #[test]
    fn accepts_strings_and_numbers() {
        let p: Probe = serde_json::from_str(r#"{ "v": "1 2.5 -3", "pair": "800 600", "f": "0.25" }"#).unwrap();
        assert_eq!(p.v, Vector3::new(1.0, 2.5, -3.0));
        assert_eq!(p.pair, [800, 600]);
        assert_eq!(p.f, 0.25);

        let p: Probe = serde_json::from_str(r#"{ "v": [1, "2.5", -3], "pair": [800, 600], "f": 0.25 }"#).unwrap();
        assert_eq!(p.v, Vector3::new(1.0, 2.5, -3.0));
        assert_eq!(p.pair, [800, 600]);
    }

    #[test]
    fn rejects_wrong_arity() {
        assert!(serde_json::from_str::<Probe>(r#"{ "v": "1 2", "pair": "1 1", "f": 1 }"#).is_err());
        assert!(serde_json::from_str::<Probe>(r#"{ "v": [1, 2, 3, 4], "pair": "1 1", "f": 1 }"#).is_err());
        assert!(serde_json::from_str::<Probe>(r#"{ "v": "1 2 3", "pair": "1", "f": 1 }"#).is_err());
    }

    #[test]
    fn flat_position_string() {
        let v = parse_string_vecvec3("0 0 0\n1 0 0\n0 1 0").unwrap();
        assert_eq!(v.len(), 3);
        assert_eq!(v[2], Vector3::Y);
        assert!(parse_string_vecvec3("").unwrap().is_empty());
        assert!(parse_string_vecvec3("1 x 2").is_err());
    }

    #[test]
    fn zero_axis_rotation_is_identity() {
        assert_eq!(angle_axis_to_quat([90.0, 0.0, 0.0, 0.0]), Quaternion::IDENTITY);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(parse_scene_json("./does/not/exist.json").is_err());
    }
}
