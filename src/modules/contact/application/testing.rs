use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::sync::Mutex;
use uuid::Uuid;

use crate::contact::application::domain::entities::Contact;
use crate::contact::application::ports::outgoing::{
    ContactPatch, ContactRepository, ContactRepositoryError, CreateContactData, SearchFilter,
};

/// In-memory stand-in used by use case tests.
pub struct InMemoryContactRepository {
    contacts: Mutex<Vec<Contact>>,
    fail: bool,
}

impl InMemoryContactRepository {
    pub fn new() -> Self {
        Self {
            contacts: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    /// Every call answers with a database error.
    pub fn failing() -> Self {
        Self {
            contacts: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            contacts: Mutex::new(contacts),
            fail: false,
        }
    }

    pub fn snapshot(&self) -> Vec<Contact> {
        self.contacts.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), ContactRepositoryError> {
        if self.fail {
            Err(ContactRepositoryError::DatabaseError(
                "connection refused".to_string(),
            ))
        } else {
            Ok(())
        }
    }
}

pub fn contact_for(user_id: Uuid, name: &str, surname: &str) -> Contact {
    Contact {
        id: Uuid::new_v4(),
        name: name.to_string(),
        surname: surname.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        phone: "+380501234567".to_string(),
        birth_date: chrono::NaiveDate::from_ymd_opt(1990, 6, 15).unwrap(),
        additional_data: None,
        user_id,
        created_at: Utc::now() - Duration::days(1),
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn create(
        &self,
        user_id: Uuid,
        data: CreateContactData,
    ) -> Result<Contact, ContactRepositoryError> {
        self.check()?;
        let contact = Contact {
            id: Uuid::new_v4(),
            name: data.name,
            surname: data.surname,
            email: data.email,
            phone: data.phone,
            birth_date: data.birth_date,
            additional_data: data.additional_data,
            user_id,
            created_at: Utc::now(),
        };
        self.contacts.lock().unwrap().push(contact.clone());
        Ok(contact)
    }

    async fn list(
        &self,
        user_id: Uuid,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<Contact>, ContactRepositoryError> {
        self.check()?;
        let mut owned: Vec<Contact> = self
            .contacts
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.user_id == user_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| (a.created_at, a.id).cmp(&(b.created_at, b.id)));
        Ok(owned
            .into_iter()
            .skip(skip as usize)
            .take(limit as usize)
            .collect())
    }

    async fn list_all(&self, user_id: Uuid) -> Result<Vec<Contact>, ContactRepositoryError> {
        self.list(user_id, 0, u64::MAX).await
    }

    async fn find_by_id(
        &self,
        user_id: Uuid,
        contact_id: Uuid,
    ) -> Result<Option<Contact>, ContactRepositoryError> {
        self.check()?;
        Ok(self
            .contacts
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == contact_id && c.user_id == user_id)
            .cloned())
    }

    async fn update(
        &self,
        user_id: Uuid,
        contact_id: Uuid,
        patch: ContactPatch,
    ) -> Result<Contact, ContactRepositoryError> {
        self.check()?;
        let mut contacts = self.contacts.lock().unwrap();
        let contact = contacts
            .iter_mut()
            .find(|c| c.id == contact_id && c.user_id == user_id)
            .ok_or(ContactRepositoryError::NotFound)?;

        if let Some(name) = patch.name {
            contact.name = name;
        }
        if let Some(surname) = patch.surname {
            contact.surname = surname;
        }
        if let Some(email) = patch.email {
            contact.email = email;
        }
        if let Some(phone) = patch.phone {
            contact.phone = phone;
        }
        if let Some(birth_date) = patch.birth_date {
            contact.birth_date = birth_date;
        }
        if let Some(additional_data) = patch.additional_data {
            contact.additional_data = Some(additional_data);
        }

        Ok(contact.clone())
    }

    async fn delete(
        &self,
        user_id: Uuid,
        contact_id: Uuid,
    ) -> Result<Contact, ContactRepositoryError> {
        self.check()?;
        let mut contacts = self.contacts.lock().unwrap();
        let index = contacts
            .iter()
            .position(|c| c.id == contact_id && c.user_id == user_id)
            .ok_or(ContactRepositoryError::NotFound)?;
        Ok(contacts.remove(index))
    }

    async fn search(
        &self,
        user_id: Uuid,
        filter: SearchFilter,
    ) -> Result<Vec<Contact>, ContactRepositoryError> {
        self.check()?;
        let matches = |haystack: &str, needle: &Option<String>| match needle {
            Some(n) if !n.is_empty() => haystack.to_lowercase().contains(&n.to_lowercase()),
            _ => true,
        };

        Ok(self
            .contacts
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.user_id == user_id)
            .filter(|c| {
                matches(&c.name, &filter.name)
                    && matches(&c.surname, &filter.surname)
                    && matches(&c.email, &filter.email)
            })
            .cloned()
            .collect())
    }
}
