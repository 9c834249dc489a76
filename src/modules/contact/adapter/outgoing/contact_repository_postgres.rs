use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::sea_query::Expr;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::contact::application::domain::entities::Contact;
use crate::contact::application::ports::outgoing::contact_repository::{
    ContactPatch, ContactRepository, ContactRepositoryError, CreateContactData, SearchFilter,
};

use super::sea_orm_entity::contacts::{
    ActiveModel as ContactActiveModel, Column as ContactColumn, Entity as ContactEntity,
    Model as ContactModel,
};

#[derive(Clone, Debug)]
pub struct ContactRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ContactRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn find_owned(
        &self,
        user_id: Uuid,
        contact_id: Uuid,
    ) -> Result<Option<ContactModel>, ContactRepositoryError> {
        ContactEntity::find_by_id(contact_id)
            .filter(ContactColumn::UserId.eq(user_id))
            .one(&*self.db)
            .await
            .map_err(|e| ContactRepositoryError::DatabaseError(e.to_string()))
    }
}

#[async_trait]
impl ContactRepository for ContactRepositoryPostgres {
    async fn create(
        &self,
        user_id: Uuid,
        data: CreateContactData,
    ) -> Result<Contact, ContactRepositoryError> {
        let active_contact = ContactActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            surname: Set(data.surname),
            email: Set(data.email),
            phone: Set(data.phone),
            birth_date: Set(data.birth_date),
            additional_data: Set(data.additional_data),
            user_id: Set(user_id),
            created_at: NotSet,
        };

        let inserted = active_contact
            .insert(&*self.db)
            .await
            .map_err(|e| ContactRepositoryError::DatabaseError(e.to_string()))?;

        Ok(inserted.to_domain())
    }

    async fn list(
        &self,
        user_id: Uuid,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<Contact>, ContactRepositoryError> {
        let models = ContactEntity::find()
            .filter(ContactColumn::UserId.eq(user_id))
            .order_by_asc(ContactColumn::CreatedAt)
            .order_by_asc(ContactColumn::Id)
            .offset(skip)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(|e| ContactRepositoryError::DatabaseError(e.to_string()))?;

        Ok(models.iter().map(ContactModel::to_domain).collect())
    }

    async fn list_all(&self, user_id: Uuid) -> Result<Vec<Contact>, ContactRepositoryError> {
        let models = ContactEntity::find()
            .filter(ContactColumn::UserId.eq(user_id))
            .order_by_asc(ContactColumn::CreatedAt)
            .order_by_asc(ContactColumn::Id)
            .all(&*self.db)
            .await
            .map_err(|e| ContactRepositoryError::DatabaseError(e.to_string()))?;

        Ok(models.iter().map(ContactModel::to_domain).collect())
    }

    async fn find_by_id(
        &self,
        user_id: Uuid,
        contact_id: Uuid,
    ) -> Result<Option<Contact>, ContactRepositoryError> {
        Ok(self
            .find_owned(user_id, contact_id)
            .await?
            .map(|m| m.to_domain()))
    }

    async fn update(
        &self,
        user_id: Uuid,
        contact_id: Uuid,
        patch: ContactPatch,
    ) -> Result<Contact, ContactRepositoryError> {
        let contact = self
            .find_owned(user_id, contact_id)
            .await?
            .ok_or(ContactRepositoryError::NotFound)?;

        let mut active_contact: ContactActiveModel = contact.into();
        if let Some(name) = patch.name {
            active_contact.name = Set(name);
        }
        if let Some(surname) = patch.surname {
            active_contact.surname = Set(surname);
        }
        if let Some(email) = patch.email {
            active_contact.email = Set(email);
        }
        if let Some(phone) = patch.phone {
            active_contact.phone = Set(phone);
        }
        if let Some(birth_date) = patch.birth_date {
            active_contact.birth_date = Set(birth_date);
        }
        if let Some(additional_data) = patch.additional_data {
            active_contact.additional_data = Set(Some(additional_data));
        }

        let updated = active_contact
            .update(&*self.db)
            .await
            .map_err(|e| ContactRepositoryError::DatabaseError(e.to_string()))?;

        Ok(updated.to_domain())
    }

    async fn delete(
        &self,
        user_id: Uuid,
        contact_id: Uuid,
    ) -> Result<Contact, ContactRepositoryError> {
        let contact = self
            .find_owned(user_id, contact_id)
            .await?
            .ok_or(ContactRepositoryError::NotFound)?;

        let domain = contact.to_domain();
        contact
            .delete(&*self.db)
            .await
            .map_err(|e| ContactRepositoryError::DatabaseError(e.to_string()))?;

        Ok(domain)
    }

    async fn search(
        &self,
        user_id: Uuid,
        filter: SearchFilter,
    ) -> Result<Vec<Contact>, ContactRepositoryError> {
        let mut query = ContactEntity::find().filter(ContactColumn::UserId.eq(user_id));

        if let Some(name) = filter.name.filter(|s| !s.is_empty()) {
            query = query.filter(Expr::col(ContactColumn::Name).ilike(format!("%{}%", name)));
        }
        if let Some(surname) = filter.surname.filter(|s| !s.is_empty()) {
            query = query.filter(Expr::col(ContactColumn::Surname).ilike(format!("%{}%", surname)));
        }
        if let Some(email) = filter.email.filter(|s| !s.is_empty()) {
            query = query.filter(Expr::col(ContactColumn::Email).ilike(format!("%{}%", email)));
        }

        let models = query
            .order_by_asc(ContactColumn::CreatedAt)
            .order_by_asc(ContactColumn::Id)
            .all(&*self.db)
            .await
            .map_err(|e| ContactRepositoryError::DatabaseError(e.to_string()))?;

        Ok(models.iter().map(ContactModel::to_domain).collect())
    }
}
