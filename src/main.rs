use iced::widget::{button, column, container, pick_list, scrollable, text, text_input, Row};
use iced::{Alignment, Element, Length, Task, Theme};
use iced_aw::Wrap;

// Declare the application modules
mod api;
mod state;
mod ui;

use api::fetch::{self, FetchError, FETCH_FAILED_MESSAGE};
use state::data::User;
use state::filters::{apply_filters, FilterState};
use state::phase::{Directory, Phase};

/// Environment variable naming the directory endpoint URL
const API_URL_VAR: &str = "USER_DIRECTORY_API_URL";

/// Selector entry meaning "no city constraint"
const ALL_CITIES: &str = "All cities";
/// Selector entry meaning "no company constraint"
const ALL_COMPANIES: &str = "All companies";

/// Main application state
struct UserDirectory {
    /// The configured directory endpoint
    api_url: String,
    /// Where the record set is in its lifecycle
    phase: Phase,
    /// Current filter constraints
    filters: FilterState,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// The fetch task resolved, one way or the other
    UsersLoaded(Result<Vec<User>, FetchError>),
    /// User typed in the name search box
    SearchChanged(String),
    /// User picked a city (possibly the "All cities" sentinel)
    CitySelected(String),
    /// User picked a company (possibly the "All companies" sentinel)
    CompanySelected(String),
    /// User clicked "Clear Filters"
    ClearFilters,
    /// User clicked "Try Again" on the error screen
    Retry,
}

impl UserDirectory {
    /// Create a new instance of the application and start the fetch
    fn new() -> (Self, Task<Message>) {
        // The endpoint is process-wide configuration; the app cannot
        // function without it, so fail loudly at startup
        let api_url = std::env::var(API_URL_VAR)
            .expect("USER_DIRECTORY_API_URL must be set to the directory endpoint URL");

        println!("📇 User Directory starting, endpoint: {api_url}");

        let app = UserDirectory {
            api_url: api_url.clone(),
            phase: Phase::Loading,
            filters: FilterState::new(),
        };

        (
            app,
            Task::perform(fetch::fetch_users(api_url), Message::UsersLoaded),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::UsersLoaded(Ok(users)) => {
                println!("✅ Directory ready with {} users", users.len());
                self.phase = Phase::Ready(Directory::new(users));
                Task::none()
            }
            Message::UsersLoaded(Err(error)) => {
                // The classified cause stays in the log; the UI only
                // ever sees the one generic message
                eprintln!("❌ Fetch failed: {error}");
                self.phase = Phase::Failed(FETCH_FAILED_MESSAGE.to_string());
                Task::none()
            }
            Message::SearchChanged(value) => {
                self.filters.search = value;
                Task::none()
            }
            Message::CitySelected(value) => {
                self.filters.city = if value == ALL_CITIES {
                    String::new()
                } else {
                    value
                };
                Task::none()
            }
            Message::CompanySelected(value) => {
                self.filters.company = if value == ALL_COMPANIES {
                    String::new()
                } else {
                    value
                };
                Task::none()
            }
            Message::ClearFilters => {
                self.filters.reset();
                Task::none()
            }
            Message::Retry => {
                // Equivalent to a full restart: reset the whole state
                // container and fetch from scratch
                self.filters.reset();
                self.phase = Phase::Loading;
                Task::perform(
                    fetch::fetch_users(self.api_url.clone()),
                    Message::UsersLoaded,
                )
            }
        }
    }

    /// Build the user interface for the current phase
    fn view(&self) -> Element<Message> {
        match &self.phase {
            Phase::Idle | Phase::Loading => Self::loading_view(),
            Phase::Failed(message) => Self::error_view(message),
            Phase::Ready(directory) => self.directory_view(directory),
        }
    }

    /// Full-screen placeholder while the fetch is in flight
    fn loading_view<'a>() -> Element<'a, Message> {
        let content = column![text("Loading users...").size(20)]
            .spacing(20)
            .align_x(Alignment::Center);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }

    /// Full-screen error state with a manual retry action
    fn error_view(message: &str) -> Element<Message> {
        let content = column![
            text("Oops! Something went wrong").size(24),
            text(message).size(16),
            button("Try Again").on_press(Message::Retry).padding(10),
        ]
        .spacing(20)
        .align_x(Alignment::Center);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }

    /// The browsable directory: filter bar, result count and card grid
    fn directory_view<'a>(&'a self, directory: &'a Directory) -> Element<'a, Message> {
        let filtered = apply_filters(&directory.users, &self.filters);

        let mut count_line = Row::new().spacing(12).push(
            text(format!(
                "Showing {} of {} users",
                filtered.len(),
                directory.users.len()
            ))
            .size(14),
        );
        if self.filters.is_active() {
            count_line = count_line.push(text("Active filters applied").size(14));
        }

        let results: Element<Message> = if filtered.is_empty() {
            Self::no_results_view(self.filters.is_active())
        } else {
            let cards: Vec<Element<Message>> =
                filtered.into_iter().map(ui::card::user_card).collect();

            scrollable(Wrap::with_elements(cards).spacing(16.0).line_spacing(16.0))
                .height(Length::Fill)
                .into()
        };

        column![
            column![
                text("User Directory").size(32),
                text("Browse and filter through our user database").size(16),
            ]
            .spacing(4),
            self.filter_bar(directory),
            count_line,
            results,
        ]
        .spacing(20)
        .padding(24)
        .into()
    }

    /// Search box, facet selectors and the clear button
    fn filter_bar<'a>(&'a self, directory: &'a Directory) -> Element<'a, Message> {
        // Each selector gets its "all" sentinel prepended to the facets;
        // the empty string never reaches the widgets
        let mut city_options = vec![ALL_CITIES.to_string()];
        city_options.extend(directory.facets.cities.iter().cloned());
        let selected_city = if self.filters.city.is_empty() {
            ALL_CITIES.to_string()
        } else {
            self.filters.city.clone()
        };

        let mut company_options = vec![ALL_COMPANIES.to_string()];
        company_options.extend(directory.facets.companies.iter().cloned());
        let selected_company = if self.filters.company.is_empty() {
            ALL_COMPANIES.to_string()
        } else {
            self.filters.company.clone()
        };

        Row::new()
            .spacing(12)
            .push(
                text_input("Enter user name...", &self.filters.search)
                    .on_input(Message::SearchChanged)
                    .padding(8)
                    .width(Length::FillPortion(2)),
            )
            .push(
                pick_list(city_options, Some(selected_city), Message::CitySelected)
                    .padding(8)
                    .width(Length::FillPortion(1)),
            )
            .push(
                pick_list(
                    company_options,
                    Some(selected_company),
                    Message::CompanySelected,
                )
                .padding(8)
                .width(Length::FillPortion(1)),
            )
            .push(
                button("Clear Filters")
                    .on_press_maybe(self.filters.is_active().then_some(Message::ClearFilters))
                    .padding(8),
            )
            .into()
    }

    /// Shown in place of the grid when no record matches the filters
    fn no_results_view(filters_active: bool) -> Element<'static, Message> {
        let mut content = column![
            text("No users found").size(20),
            text("Try adjusting your filters to see more results.").size(14),
        ]
        .spacing(8)
        .align_x(Alignment::Center);

        if filters_active {
            content = content.push(
                button("Clear all filters")
                    .on_press(Message::ClearFilters)
                    .padding(8),
            );
        }

        container(content)
            .width(Length::Fill)
            .padding(40)
            .center_x(Length::Fill)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }
}

fn main() -> iced::Result {
    iced::application(
        "User Directory",
        UserDirectory::update,
        UserDirectory::view,
    )
    .theme(UserDirectory::theme)
    .centered()
    .run_with(UserDirectory::new)
}
