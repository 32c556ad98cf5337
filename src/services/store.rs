use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;
use tracing::{debug, info};

use crate::models::{ListingStatus, ScholarshipRecord, Statistics};
use crate::services::catalog;

const SCHOLARSHIPS_KEY: &str = "scholarships_db";
const APPLICATIONS_KEY: &str = "applications_db";

/// Errors that can occur when working with the scholarship store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Scholarship not found: {0}")]
    ScholarshipNotFound(u32),

    #[error("Student {student_id} has already applied to scholarship {scholarship_id}")]
    AlreadyApplied {
        student_id: u32,
        scholarship_id: u32,
    },

    #[error("The deadline for scholarship {0} has passed")]
    DeadlinePassed(u32),
}

/// Key-value persistence seam.
///
/// The original product keeps its record lists in browser local storage;
/// anything that can hold string entries under string keys satisfies the
/// store. The in-memory backend is the default and the one tests use.
pub trait KeyValue {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
    fn remove(&mut self, key: &str);
}

/// HashMap-backed key-value storage
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: HashMap<String, String>,
}

impl KeyValue for MemoryBackend {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Approved,
    Rejected,
}

/// A student's application to one scholarship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Application {
    pub id: u32,
    #[serde(rename = "studentId")]
    pub student_id: u32,
    #[serde(rename = "applicantName")]
    pub applicant_name: String,
    pub email: String,
    #[serde(rename = "scholarshipId")]
    pub scholarship_id: u32,
    pub marks: u32,
    pub essay: String,
    pub status: ApplicationStatus,
    #[serde(rename = "appliedDate")]
    pub applied_date: DateTime<Utc>,
    #[serde(rename = "reviewedDate", default)]
    pub reviewed_date: Option<DateTime<Utc>>,
    #[serde(rename = "reviewedBy", default)]
    pub reviewed_by: Option<u32>,
}

/// Fields a student supplies when applying
#[derive(Debug, Clone)]
pub struct NewApplication {
    pub student_id: u32,
    pub applicant_name: String,
    pub email: String,
    pub scholarship_id: u32,
    pub marks: u32,
    pub essay: String,
}

/// Scholarship and application persistence over a key-value backend.
///
/// Single-threaded by design: one process, one writer, no locking. Lists
/// are held in memory and written back as serialized JSON entries after
/// every mutation, mirroring the original's load/save cycle.
pub struct ScholarshipStore<B: KeyValue> {
    backend: B,
    scholarships: Vec<ScholarshipRecord>,
    applications: Vec<Application>,
}

impl<B: KeyValue> ScholarshipStore<B> {
    /// Open a store over the backend, seeding the built-in catalog when the
    /// scholarship entry is empty or absent.
    pub fn open(backend: B) -> Result<Self, StoreError> {
        let scholarships: Vec<ScholarshipRecord> = match backend.get(SCHOLARSHIPS_KEY) {
            Some(raw) => serde_json::from_str(&raw)?,
            None => Vec::new(),
        };
        let applications: Vec<Application> = match backend.get(APPLICATIONS_KEY) {
            Some(raw) => serde_json::from_str(&raw)?,
            None => Vec::new(),
        };

        let mut store = Self {
            backend,
            scholarships,
            applications,
        };

        if store.scholarships.is_empty() {
            info!("scholarship store empty, seeding built-in catalog");
            store.scholarships = catalog::seed();
            store.save()?;
        }

        Ok(store)
    }

    fn save(&mut self) -> Result<(), StoreError> {
        self.backend
            .set(SCHOLARSHIPS_KEY, serde_json::to_string(&self.scholarships)?);
        self.backend
            .set(APPLICATIONS_KEY, serde_json::to_string(&self.applications)?);
        Ok(())
    }

    /// All active scholarships, in insertion order
    pub fn active_scholarships(&self) -> Vec<&ScholarshipRecord> {
        self.scholarships
            .iter()
            .filter(|s| s.status == ListingStatus::Active)
            .collect()
    }

    /// Scholarships owned by one admin, regardless of status
    pub fn scholarships_for_admin(&self, admin_id: u32) -> Vec<&ScholarshipRecord> {
        self.scholarships
            .iter()
            .filter(|s| s.owner_id == Some(admin_id))
            .collect()
    }

    pub fn scholarship_by_id(&self, id: u32) -> Option<&ScholarshipRecord> {
        self.scholarships.iter().find(|s| s.id == id)
    }

    /// Create a scholarship owned by the given admin. Ids are allocated as
    /// max existing id + 1, as the original does.
    pub fn create_scholarship(
        &mut self,
        mut record: ScholarshipRecord,
        admin_id: u32,
    ) -> Result<u32, StoreError> {
        record.id = self.scholarships.iter().map(|s| s.id).max().unwrap_or(0) + 1;
        record.owner_id = Some(admin_id);
        record.status = ListingStatus::Active;
        let id = record.id;

        debug!(scholarship_id = id, admin_id, "creating scholarship");
        self.scholarships.push(record);
        self.save()?;
        Ok(id)
    }

    /// Apply an edit to an existing scholarship. Unknown ids yield
    /// Ok(None), never an error.
    pub fn update_scholarship(
        &mut self,
        id: u32,
        edit: impl FnOnce(&mut ScholarshipRecord),
    ) -> Result<Option<ScholarshipRecord>, StoreError> {
        let Some(record) = self.scholarships.iter_mut().find(|s| s.id == id) else {
            return Ok(None);
        };
        edit(record);
        let updated = record.clone();
        self.save()?;
        Ok(Some(updated))
    }

    /// Delete a scholarship, but only for the admin that owns it. Related
    /// applications are removed as well. Returns false when the id is
    /// unknown or owned by someone else.
    pub fn delete_scholarship(&mut self, id: u32, admin_id: u32) -> Result<bool, StoreError> {
        let Some(index) = self
            .scholarships
            .iter()
            .position(|s| s.id == id && s.owner_id == Some(admin_id))
        else {
            return Ok(false);
        };

        self.scholarships.remove(index);
        self.applications.retain(|a| a.scholarship_id != id);
        info!(scholarship_id = id, admin_id, "deleted scholarship and its applications");
        self.save()?;
        Ok(true)
    }

    pub fn has_applied(&self, student_id: u32, scholarship_id: u32) -> bool {
        self.applications
            .iter()
            .any(|a| a.student_id == student_id && a.scholarship_id == scholarship_id)
    }

    pub fn application_count(&self, scholarship_id: u32) -> usize {
        self.applications
            .iter()
            .filter(|a| a.scholarship_id == scholarship_id)
            .count()
    }

    pub fn applications_for_student(&self, student_id: u32) -> Vec<&Application> {
        self.applications
            .iter()
            .filter(|a| a.student_id == student_id)
            .collect()
    }

    /// Applications against scholarships the given admin owns
    pub fn applications_for_admin(&self, admin_id: u32) -> Vec<&Application> {
        let owned: Vec<u32> = self
            .scholarships
            .iter()
            .filter(|s| s.owner_id == Some(admin_id))
            .map(|s| s.id)
            .collect();
        self.applications
            .iter()
            .filter(|a| owned.contains(&a.scholarship_id))
            .collect()
    }

    /// Submit an application. The scholarship must exist, its deadline must
    /// not have passed as of `today`, and a student may apply only once.
    pub fn submit_application(
        &mut self,
        new: NewApplication,
        today: NaiveDate,
    ) -> Result<u32, StoreError> {
        let scholarship = self
            .scholarship_by_id(new.scholarship_id)
            .ok_or(StoreError::ScholarshipNotFound(new.scholarship_id))?;

        if scholarship.deadline < today {
            return Err(StoreError::DeadlinePassed(new.scholarship_id));
        }
        if self.has_applied(new.student_id, new.scholarship_id) {
            return Err(StoreError::AlreadyApplied {
                student_id: new.student_id,
                scholarship_id: new.scholarship_id,
            });
        }

        let id = self.applications.iter().map(|a| a.id).max().unwrap_or(0) + 1;
        let application = Application {
            id,
            student_id: new.student_id,
            applicant_name: new.applicant_name,
            email: new.email,
            scholarship_id: new.scholarship_id,
            marks: new.marks,
            essay: new.essay,
            status: ApplicationStatus::Pending,
            applied_date: Utc::now(),
            reviewed_date: None,
            reviewed_by: None,
        };

        info!(application_id = id, scholarship_id = application.scholarship_id, "application submitted");
        self.applications.push(application);
        self.save()?;
        Ok(id)
    }

    /// Approve or reject an application. The reviewing admin must own the
    /// scholarship; a mismatch or unknown id yields Ok(None), surfaced to
    /// the portal as a denial rather than an error.
    pub fn review_application(
        &mut self,
        application_id: u32,
        status: ApplicationStatus,
        admin_id: u32,
    ) -> Result<Option<Application>, StoreError> {
        let Some(index) = self.applications.iter().position(|a| a.id == application_id) else {
            return Ok(None);
        };

        let owns = self
            .scholarship_by_id(self.applications[index].scholarship_id)
            .map_or(false, |s| s.owner_id == Some(admin_id));
        if !owns {
            debug!(application_id, admin_id, "review denied: admin does not own scholarship");
            return Ok(None);
        }

        let application = &mut self.applications[index];
        application.status = status;
        application.reviewed_date = Some(Utc::now());
        application.reviewed_by = Some(admin_id);
        let reviewed = application.clone();

        self.save()?;
        Ok(Some(reviewed))
    }

    /// Dashboard counts, optionally scoped to one admin's scholarships
    pub fn statistics(&self, admin_id: Option<u32>) -> Statistics {
        let scholarships: Vec<&ScholarshipRecord> = match admin_id {
            Some(id) => self.scholarships_for_admin(id),
            None => self.scholarships.iter().collect(),
        };
        let applications: Vec<&Application> = match admin_id {
            Some(id) => self.applications_for_admin(id),
            None => self.applications.iter().collect(),
        };

        Statistics {
            total_scholarships: scholarships.len(),
            active_scholarships: scholarships
                .iter()
                .filter(|s| s.status == ListingStatus::Active)
                .count(),
            total_applications: applications.len(),
            pending_applications: applications
                .iter()
                .filter(|a| a.status == ApplicationStatus::Pending)
                .count(),
            approved_applications: applications
                .iter()
                .filter(|a| a.status == ApplicationStatus::Approved)
                .count(),
            rejected_applications: applications
                .iter()
                .filter(|a| a.status == ApplicationStatus::Rejected)
                .count(),
        }
    }
}
