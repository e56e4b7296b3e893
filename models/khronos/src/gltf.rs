use json::JsonValue;
use thiserror::Error;

/// Placeholder reported for meshes without a `name`
pub const UNNAMED: &str = "Unnamed";

#[derive(Error, Debug, PartialEq)]
pub enum SchemaError {
	#[error("glTF document root is not an object")]
	Root,
	#[error("`{0}` is not an array")]
	NotArray(String),
	#[error("`{0}` is not an object")]
	NotObject(String),
	#[error("`{0}` is not a string")]
	Name(String),
	#[error("`{path}` is not a valid material index: {value}")]
	Material {
		path: String,
		value: String,
	},
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Primitive {
	pub material: Option<u32>,
}

impl Primitive {
	fn from_json(path: &str, value: &JsonValue) -> Result<Primitive, SchemaError> {
		if !value.is_object() {
			return Err(SchemaError::NotObject(path.to_string()));
		}

		let material = &value["material"];
		if material.is_null() {
			return Ok(Primitive::default());
		}

		match material.as_u32() {
			Some(index) if material.as_f64() == Some(index as f64) => Ok(Primitive {
				material: Some(index),
			}),
			_ => Err(SchemaError::Material {
				path: format!("{}.material", path),
				value: material.dump(),
			}),
		}
	}
}

/// Mesh metadata only; accessors and buffers are never resolved.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
	pub name: Option<String>,
	pub primitives: Vec<Primitive>,
}

impl Mesh {
	fn from_json(path: &str, value: &JsonValue) -> Result<Mesh, SchemaError> {
		if !value.is_object() {
			return Err(SchemaError::NotObject(path.to_string()));
		}

		let name = match &value["name"] {
			JsonValue::Null => None,
			n => match n.as_str() {
				Some(s) => Some(s.to_string()),
				None => return Err(SchemaError::Name(format!("{}.name", path))),
			},
		};

		let mut primitives = vec![];
		let prims = &value["primitives"];
		if !prims.is_null() {
			let prims_path = format!("{}.primitives", path);
			if !prims.is_array() {
				return Err(SchemaError::NotArray(prims_path));
			}

			for (i, prim) in prims.members().enumerate() {
				primitives.push(Primitive::from_json(&format!("{}[{}]", prims_path, i), prim)?);
			}
		}

		Ok(Mesh {
			name: name,
			primitives: primitives,
		})
	}

	/// The mesh name, or [`UNNAMED`] if it has none
	pub fn display_name(&self) -> &str {
		self.name.as_deref().unwrap_or(UNNAMED)
	}
}

/// Collects the mesh list from a parsed glTF document.
/// Returns `None` when the document has no `meshes` field at all.
pub fn meshes(doc: &JsonValue) -> Result<Option<Vec<Mesh>>, SchemaError> {
	if !doc.is_object() {
		return Err(SchemaError::Root);
	}

	if !doc.has_key("meshes") {
		return Ok(None);
	}

	let list = &doc["meshes"];
	if !list.is_array() {
		return Err(SchemaError::NotArray("meshes".to_string()));
	}

	let mut meshes = vec![];
	for (i, mesh) in list.members().enumerate() {
		meshes.push(Mesh::from_json(&format!("meshes[{}]", i), mesh)?);
	}

	Ok(Some(meshes))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_meshes() {
		let doc = json::parse(r#"{
			"asset": { "version": "2.0" },
			"meshes": [
				{ "name": "Shell", "primitives": [ { "material": 0 }, { "attributes": {} } ] },
				{ "primitives": [ { "material": 3 } ] },
				{ "name": "Reel" }
			]
		}"#).unwrap();

		let expected = vec![
			Mesh {
				name: Some("Shell".to_string()),
				primitives: vec![Primitive { material: Some(0) }, Primitive { material: None }],
			},
			Mesh {
				name: None,
				primitives: vec![Primitive { material: Some(3) }],
			},
			Mesh {
				name: Some("Reel".to_string()),
				primitives: vec![],
			},
		];

		assert_eq!(Ok(Some(expected)), meshes(&doc));
	}

	#[test]
	fn test_no_meshes() {
		let doc = json::parse(r#"{ "asset": { "version": "2.0" }, "nodes": [] }"#).unwrap();
		assert_eq!(Ok(None), meshes(&doc));
	}

	#[test]
	fn test_display_name() {
		assert_eq!("Unnamed", Mesh::default().display_name());
		assert_eq!("Tape", Mesh { name: Some("Tape".to_string()), primitives: vec![] }.display_name());
	}

	#[test]
	fn test_null_material_is_absent() {
		let doc = json::parse(r#"{ "meshes": [ { "primitives": [ { "material": null } ] } ] }"#).unwrap();
		assert_eq!(Ok(Some(vec![Mesh { name: None, primitives: vec![Primitive::default()] }])), meshes(&doc));
	}

	#[test]
	fn test_bad_material() {
		let doc = json::parse(r#"{ "meshes": [ { "primitives": [ { "material": 1.5 } ] } ] }"#).unwrap();
		assert_eq!(Err(SchemaError::Material {
			path: "meshes[0].primitives[0].material".to_string(),
			value: "1.5".to_string(),
		}), meshes(&doc));

		let doc = json::parse(r#"{ "meshes": [ { "primitives": [ { "material": "red" } ] } ] }"#).unwrap();
		assert!(matches!(meshes(&doc), Err(SchemaError::Material { .. })));
	}

	#[test]
	fn test_bad_shapes() {
		assert_eq!(Err(SchemaError::Root), meshes(&json::parse("[]").unwrap()));
		assert_eq!(Err(SchemaError::NotArray("meshes".to_string())),
			meshes(&json::parse(r#"{ "meshes": {} }"#).unwrap()));
		assert_eq!(Err(SchemaError::NotObject("meshes[1]".to_string())),
			meshes(&json::parse(r#"{ "meshes": [ {}, 4 ] }"#).unwrap()));
		assert_eq!(Err(SchemaError::Name("meshes[0].name".to_string())),
			meshes(&json::parse(r#"{ "meshes": [ { "name": 7 } ] }"#).unwrap()));
		assert_eq!(Err(SchemaError::NotArray("meshes[0].primitives".to_string())),
			meshes(&json::parse(r#"{ "meshes": [ { "primitives": 0 } ] }"#).unwrap()));
	}
}
