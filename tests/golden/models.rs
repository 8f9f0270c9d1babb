//
// autogenerated file.  do not edit directly
//

#[allow(non_camel_case_types, non_snake_case, unused_mut, unused_imports, dead_code)]
pub mod models {
    use serde_json::{Map, Value};

    /// Conversion to and from `serde_json::Value`.
    pub trait JsonModel: Sized {
        fn to_json(&self) -> Value;
        fn from_json(j: &Value) -> Result<Self, serde_json::Error>;
    }

    macro_rules! json_scalar {
        ($($t:ty),*) => {$(
            impl JsonModel for $t {
                fn to_json(&self) -> Value {
                    Value::from(self.clone())
                }

                fn from_json(j: &Value) -> Result<Self, serde_json::Error> {
                    <$t as serde::Deserialize>::deserialize(j)
                }
            }
        )*};
    }

    json_scalar!(String, bool, f32, f64, i16, u16, i32, u32, i64, u64);

    impl<T: JsonModel> JsonModel for Vec<T> {
        fn to_json(&self) -> Value {
            Value::Array(self.iter().map(JsonModel::to_json).collect())
        }

        fn from_json(j: &Value) -> Result<Self, serde_json::Error> {
            match j {
                Value::Array(items) => items.iter().map(T::from_json).collect(),
                _ => Err(serde::de::Error::custom("expected an array")),
            }
        }
    }

    impl JsonModel for Value {
        fn to_json(&self) -> Value {
            self.clone()
        }

        fn from_json(j: &Value) -> Result<Self, serde_json::Error> {
            Ok(j.clone())
        }
    }

    fn is_empty(j: &Value) -> bool {
        match j {
            Value::Null => true,
            Value::Array(items) => items.is_empty(),
            Value::Object(map) => map.is_empty(),
            _ => false,
        }
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Pet {
        pub name: String,
        pub alive: bool,
        pub grid: Vec<Vec<i64>>,
    }

    impl JsonModel for Pet {
        fn to_json(&self) -> Value {
            let mut j = Map::new();
            j.insert("name".to_owned(), self.name.to_json());
            j.insert("alive".to_owned(), self.alive.to_json());
            j.insert("grid".to_owned(), self.grid.to_json());
            Value::Object(j)
        }

        fn from_json(j: &Value) -> Result<Self, serde_json::Error> {
            let mut r = Self::default();
            if let Some(v) = j.get("name").filter(|v| !is_empty(v)) {
                r.name = JsonModel::from_json(v)?;
            }
            if let Some(v) = j.get("alive").filter(|v| !is_empty(v)) {
                r.alive = JsonModel::from_json(v)?;
            }
            if let Some(v) = j.get("grid").filter(|v| !is_empty(v)) {
                r.grid = JsonModel::from_json(v)?;
            }
            Ok(r)
        }
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Tag {
        pub value: String,
    }

    impl JsonModel for Tag {
        fn to_json(&self) -> Value {
            self.value.to_json()
        }

        fn from_json(j: &Value) -> Result<Self, serde_json::Error> {
            Ok(Self { value: JsonModel::from_json(j)? })
        }
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Owner {
        pub name: String,
        pub age: i32,
        pub score: f64,
        pub pets: Vec<Pet>,
        pub meta: Value,
        pub r#type: String,
        pub tag_id: Tag,
    }

    impl JsonModel for Owner {
        fn to_json(&self) -> Value {
            let mut j = Map::new();
            j.insert("name".to_owned(), self.name.to_json());
            j.insert("age".to_owned(), self.age.to_json());
            j.insert("score".to_owned(), self.score.to_json());
            j.insert("pets".to_owned(), self.pets.to_json());
            j.insert("meta".to_owned(), self.meta.to_json());
            j.insert("type".to_owned(), self.r#type.to_json());
            j.insert("tag-id".to_owned(), self.tag_id.to_json());
            Value::Object(j)
        }

        fn from_json(j: &Value) -> Result<Self, serde_json::Error> {
            let mut r = Self::default();
            if let Some(v) = j.get("name").filter(|v| !is_empty(v)) {
                r.name = JsonModel::from_json(v)?;
            }
            if let Some(v) = j.get("age").filter(|v| !is_empty(v)) {
                r.age = JsonModel::from_json(v)?;
            }
            if let Some(v) = j.get("score").filter(|v| !is_empty(v)) {
                r.score = JsonModel::from_json(v)?;
            }
            if let Some(v) = j.get("pets").filter(|v| !is_empty(v)) {
                r.pets = JsonModel::from_json(v)?;
            }
            if let Some(v) = j.get("meta").filter(|v| !is_empty(v)) {
                r.meta = JsonModel::from_json(v)?;
            }
            if let Some(v) = j.get("type").filter(|v| !is_empty(v)) {
                r.r#type = JsonModel::from_json(v)?;
            }
            if let Some(v) = j.get("tag-id").filter(|v| !is_empty(v)) {
                r.tag_id = JsonModel::from_json(v)?;
            }
            Ok(r)
        }
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Puppy {
        pub name: String,
        pub alive: bool,
        pub grid: Vec<Vec<i64>>,
        pub weeks: u16,
    }

    impl JsonModel for Puppy {
        fn to_json(&self) -> Value {
            let mut j = Map::new();
            j.insert("name".to_owned(), self.name.to_json());
            j.insert("alive".to_owned(), self.alive.to_json());
            j.insert("grid".to_owned(), self.grid.to_json());
            j.insert("weeks".to_owned(), self.weeks.to_json());
            Value::Object(j)
        }

        fn from_json(j: &Value) -> Result<Self, serde_json::Error> {
            let mut r = Self::default();
            if let Some(v) = j.get("name").filter(|v| !is_empty(v)) {
                r.name = JsonModel::from_json(v)?;
            }
            if let Some(v) = j.get("alive").filter(|v| !is_empty(v)) {
                r.alive = JsonModel::from_json(v)?;
            }
            if let Some(v) = j.get("grid").filter(|v| !is_empty(v)) {
                r.grid = JsonModel::from_json(v)?;
            }
            if let Some(v) = j.get("weeks").filter(|v| !is_empty(v)) {
                r.weeks = JsonModel::from_json(v)?;
            }
            Ok(r)
        }
    }
}
