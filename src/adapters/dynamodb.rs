use crate::domain::model::Title;
use crate::domain::ports::{StoredTitle, TitleStore};
use crate::utils::error::{Result, TitlesError};
use async_trait::async_trait;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client as DynamoClient;
use std::collections::HashMap;

const ISBN_ATTR: &str = "isbn";
const NAME_ATTR: &str = "name";
const DESCRIPTION_ATTR: &str = "description";

/// Titles table with `isbn` as the string partition key.
#[derive(Debug, Clone)]
pub struct DynamoTitleStore {
    client: DynamoClient,
    table_name: String,
}

impl DynamoTitleStore {
    pub fn new(client: DynamoClient, table_name: String) -> Self {
        Self { client, table_name }
    }

    fn key(isbn: &str) -> (String, AttributeValue) {
        (ISBN_ATTR.to_string(), AttributeValue::S(isbn.to_string()))
    }
}

fn string_attribute(item: &HashMap<String, AttributeValue>, name: &str) -> Result<String> {
    item.get(name)
        .and_then(|value| value.as_s().ok())
        .cloned()
        .ok_or_else(|| TitlesError::Store {
            operation: "get_item",
            message: format!("stored item has no string attribute '{}'", name),
        })
}

#[async_trait]
impl TitleStore for DynamoTitleStore {
    async fn put_title(&self, title: &Title) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .item(ISBN_ATTR, AttributeValue::S(title.isbn.clone()))
            .item(NAME_ATTR, AttributeValue::S(title.name.clone()))
            .item(DESCRIPTION_ATTR, AttributeValue::S(title.description.clone()))
            .send()
            .await
            .map_err(|e| TitlesError::store("put_item", DisplayErrorContext(e)))?;

        Ok(())
    }

    async fn delete_title(&self, isbn: &str) -> Result<()> {
        let (key, value) = Self::key(isbn);
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key(key, value)
            .send()
            .await
            .map_err(|e| TitlesError::store("delete_item", DisplayErrorContext(e)))?;

        Ok(())
    }

    async fn get_title(&self, isbn: &str) -> Result<Option<StoredTitle>> {
        let (key, value) = Self::key(isbn);
        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(key, value)
            .send()
            .await
            .map_err(|e| TitlesError::store("get_item", DisplayErrorContext(e)))?;

        match output.item() {
            Some(item) => Ok(Some(StoredTitle {
                name: string_attribute(item, NAME_ATTR)?,
                description: string_attribute(item, DESCRIPTION_ATTR)?,
            })),
            None => Ok(None),
        }
    }
}
