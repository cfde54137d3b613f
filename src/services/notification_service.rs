use leptos::prelude::*;
use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastType {
    Success,
    Error,
    Info,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: Uuid,
    pub toast_type: ToastType,
    pub title: String,
    pub message: Option<String>,
    pub duration_ms: Option<u64>,
}

/// Auto-dismiss delay for toasts that carry no sticky error detail.
const DEFAULT_DURATION_MS: u64 = 4000;

#[derive(Clone, Copy)]
pub struct NotificationState {
    pub notifications: RwSignal<Vec<Notification>>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self {
            notifications: RwSignal::new(Vec::new()),
        }
    }

    pub fn add(&self, toast_type: ToastType, title: String, message: Option<String>) {
        let notification = Notification {
            id: Uuid::new_v4(),
            toast_type,
            title,
            message,
            duration_ms: Some(DEFAULT_DURATION_MS),
        };
        self.notifications.update(|list| list.push(notification));
    }

    pub fn remove(&self, id: Uuid) {
        self.notifications.update(|list| {
            if let Some(pos) = list.iter().position(|n| n.id == id) {
                list.remove(pos);
            }
        });
    }
}

// Global accessor helpers
pub fn provide_notification_state() {
    provide_context(NotificationState::new());
}

pub fn use_notification_state() -> NotificationState {
    expect_context::<NotificationState>()
}

pub fn remove_notification(id: Uuid) {
    if let Some(state) = use_context::<NotificationState>() {
        state.remove(id);
    }
}

pub fn show_success(title: &str, message: Option<&str>) {
    if let Some(state) = use_context::<NotificationState>() {
        state.add(ToastType::Success, title.to_string(), message.map(String::from));
    }
}

pub fn show_error(title: &str, message: Option<&str>) {
    if let Some(state) = use_context::<NotificationState>() {
        state.add(ToastType::Error, title.to_string(), message.map(String::from));
    }
}

pub fn show_info(title: &str, message: Option<&str>) {
    if let Some(state) = use_context::<NotificationState>() {
        state.add(ToastType::Info, title.to_string(), message.map(String::from));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_appends_notification() {
        let state = NotificationState::new();
        state.add(ToastType::Success, "Created".to_string(), None);
        let list = state.notifications.get_untracked();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].title, "Created");
        assert_eq!(list[0].toast_type, ToastType::Success);
    }

    #[test]
    fn test_remove_by_id() {
        let state = NotificationState::new();
        state.add(ToastType::Info, "One".to_string(), None);
        state.add(ToastType::Error, "Two".to_string(), Some("detail".to_string()));
        let id = state.notifications.get_untracked()[0].id;

        state.remove(id);

        let list = state.notifications.get_untracked();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].title, "Two");
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let state = NotificationState::new();
        state.add(ToastType::Info, "One".to_string(), None);
        state.remove(Uuid::new_v4());
        assert_eq!(state.notifications.get_untracked().len(), 1);
    }
}
