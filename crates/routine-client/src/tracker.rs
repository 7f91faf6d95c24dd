//! Tracker resource calls

use http::Method;
use routine_types::{
    AuthToken, Credentials, Listing, NewRoutine, Registration, Routine, Schedule, Snippet, Task,
    User,
};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::transport::Transport;

impl<T: Transport> ApiClient<T> {
    /// Exchange credentials for an API token
    pub async fn obtain_token(&self, credentials: &Credentials) -> Result<AuthToken, ApiError> {
        let request = self.request(Method::POST, "/auth/token/")?.json(credentials)?;
        self.execute(request).await
    }

    pub async fn list_routines(&self) -> Result<Vec<Routine>, ApiError> {
        let request = self.request(Method::GET, "/routines/")?;
        let listing: Listing<Routine> = self.execute(request).await?;
        Ok(listing.into_items())
    }

    pub async fn get_routine(&self, id: u64) -> Result<Routine, ApiError> {
        let request = self.request(Method::GET, &format!("/routines/{id}/"))?;
        self.execute(request).await
    }

    pub async fn create_routine(&self, routine: &NewRoutine) -> Result<Routine, ApiError> {
        let request = self.request(Method::POST, "/routines/")?.json(routine)?;
        self.execute(request).await
    }

    pub async fn delete_routine(&self, id: u64) -> Result<(), ApiError> {
        let request = self.request(Method::DELETE, &format!("/routines/{id}/"))?;
        self.send(request).await?;
        Ok(())
    }

    pub async fn list_tasks(&self) -> Result<Vec<Task>, ApiError> {
        let request = self.request(Method::GET, "/tasks/")?;
        let listing: Listing<Task> = self.execute(request).await?;
        Ok(listing.into_items())
    }

    pub async fn create_task(&self, task: &Task) -> Result<Task, ApiError> {
        let request = self.request(Method::POST, "/tasks/")?.json(task)?;
        self.execute(request).await
    }

    pub async fn list_schedules(&self) -> Result<Vec<Schedule>, ApiError> {
        let request = self.request(Method::GET, "/schedulers/")?;
        let listing: Listing<Schedule> = self.execute(request).await?;
        Ok(listing.into_items())
    }

    pub async fn list_snippets(&self) -> Result<Vec<Snippet>, ApiError> {
        let request = self.request(Method::GET, "/snippets/")?;
        let listing: Listing<Snippet> = self.execute(request).await?;
        Ok(listing.into_items())
    }

    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        let request = self.request(Method::GET, "/users/")?;
        let listing: Listing<User> = self.execute(request).await?;
        Ok(listing.into_items())
    }

    pub async fn get_user(&self, id: u64) -> Result<User, ApiError> {
        let request = self.request(Method::GET, &format!("/users/{id}/"))?;
        self.execute(request).await
    }

    /// Create an account; the server answers with the new user.
    pub async fn register(&self, registration: &Registration) -> Result<User, ApiError> {
        let request = self.request(Method::POST, "/users/")?.json(registration)?;
        self.execute(request).await
    }
}

#[cfg(test)]
#[path = "tracker_test.rs"]
mod tracker_test;
