//! Users and administrators

use std::sync::Arc;

use crate::ports::{ClientRepository, PersistenceClient};
use crate::records::{Admin, User};

use super::RecordService;

pub struct UserService {
    users: Arc<RecordService<User>>,
    admins: Arc<RecordService<Admin>>,
}

impl UserService {
    pub fn new(client: Arc<dyn PersistenceClient>) -> Self {
        Self {
            users: Arc::new(RecordService::new(Arc::new(ClientRepository::<User>::new(
                client.clone(),
            )))),
            admins: Arc::new(RecordService::new(Arc::new(ClientRepository::<Admin>::new(
                client,
            )))),
        }
    }

    pub fn users(&self) -> &Arc<RecordService<User>> {
        &self.users
    }

    pub fn admins(&self) -> &Arc<RecordService<Admin>> {
        &self.admins
    }
}
