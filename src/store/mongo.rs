//! MongoDB Document Store
//!
//! Documents travel as JSON and are converted to BSON with serde.
//! ObjectIds are rendered as 24-character hex strings on the way out.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{self, Bson, Document as BsonDocument};
use mongodb::{Client, Database};
use serde_json::Value;

use super::document::{Document, Filter, ID_FIELD};
use super::errors::{StoreError, StoreResult};
use super::DocumentStore;

/// MongoDB-backed document store
#[derive(Debug, Clone)]
pub struct MongoStore {
    database: Database,
}

impl MongoStore {
    /// Builds a client from a connection string.
    ///
    /// The driver connects lazily, so an unreachable server surfaces on the
    /// first operation rather than here.
    pub async fn connect(url: &str, database_name: &str) -> StoreResult<Self> {
        let client = Client::with_uri_str(url)
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        Ok(Self {
            database: client.database(database_name),
        })
    }
}

fn backend_error(err: mongodb::error::Error) -> StoreError {
    StoreError::Backend(err.to_string())
}

fn to_bson_document(document: &Document) -> StoreResult<BsonDocument> {
    bson::to_document(document).map_err(|e| StoreError::Encoding(e.to_string()))
}

/// Converts a stored document back to JSON with a string identifier.
fn from_bson_document(mut document: BsonDocument) -> StoreResult<Document> {
    let id = document.remove(ID_FIELD).map(id_to_string);

    let mut json = match Bson::Document(document).into_relaxed_extjson() {
        Value::Object(map) => map,
        other => {
            return Err(StoreError::Encoding(format!(
                "expected document, found {}",
                other
            )))
        }
    };

    if let Some(id) = id {
        json.insert(ID_FIELD.to_string(), Value::String(id));
    }
    Ok(json)
}

fn id_to_string(id: Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s,
        other => other.to_string(),
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn insert(&self, collection: &str, document: Document) -> StoreResult<String> {
        let document = to_bson_document(&document)?;
        let result = self
            .database
            .collection::<BsonDocument>(collection)
            .insert_one(document)
            .await
            .map_err(backend_error)?;

        Ok(id_to_string(result.inserted_id))
    }

    async fn query(
        &self,
        collection: &str,
        filter: &Filter,
        limit: Option<usize>,
    ) -> StoreResult<Vec<Document>> {
        let filter = to_bson_document(filter.conditions())?;
        let collection = self.database.collection::<BsonDocument>(collection);
        let mut find = collection.find(filter);
        if let Some(limit) = limit {
            find = find.limit(i64::try_from(limit).unwrap_or(i64::MAX));
        }

        let documents: Vec<BsonDocument> = find
            .await
            .map_err(backend_error)?
            .try_collect()
            .await
            .map_err(backend_error)?;

        documents.into_iter().map(from_bson_document).collect()
    }

    async fn list_collections(&self) -> StoreResult<Vec<String>> {
        self.database
            .list_collection_names()
            .await
            .map_err(backend_error)
    }

    fn database_name(&self) -> &str {
        self.database.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{doc, oid::ObjectId};
    use serde_json::json;

    #[test]
    fn test_object_id_rendered_as_hex() {
        let oid = ObjectId::new();
        let stored = doc! { "_id": oid, "code": "CS101" };

        let json = from_bson_document(stored).unwrap();
        assert_eq!(json[ID_FIELD], json!(oid.to_hex()));
        assert_eq!(json["code"], "CS101");
    }

    #[test]
    fn test_json_round_trip_keeps_floats() {
        let document = json!({"amount": 12.5, "class_code": null})
            .as_object()
            .cloned()
            .unwrap();

        let bson = to_bson_document(&document).unwrap();
        assert_eq!(bson.get_f64("amount").unwrap(), 12.5);

        let back = from_bson_document(bson).unwrap();
        assert_eq!(back["amount"], 12.5);
        assert_eq!(back["class_code"], Value::Null);
    }

    /// Needs a MongoDB server on localhost:27017
    #[tokio::test]
    #[ignore]
    async fn test_insert_then_query_with_limit() {
        let store = MongoStore::connect("mongodb://localhost:27017", "university_test")
            .await
            .unwrap();
        let collection = format!("message_{}", ObjectId::new().to_hex());

        for i in 0..3 {
            let document = json!({"class_code": "CS101", "content": i})
                .as_object()
                .cloned()
                .unwrap();
            store.insert(&collection, document).await.unwrap();
        }

        let filter = Filter::new().eq("class_code", "CS101");
        let docs = store.query(&collection, &filter, Some(2)).await.unwrap();
        assert_eq!(docs.len(), 2);
        assert!(docs.iter().all(|d| d[ID_FIELD].is_string()));

        let all = store.query(&collection, &filter, None).await.unwrap();
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn test_filter_conversion() {
        let filter = Filter::new().eq("student_id", "s1");
        let bson = to_bson_document(filter.conditions()).unwrap();
        assert_eq!(bson.get_str("student_id").unwrap(), "s1");
    }
}
