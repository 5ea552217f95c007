//! Core application state and Iced Application implementation
//!
//! The window is both the display region and the search input for the
//! gallery pipeline; card pictures are fetched after their cards are shown.

use std::collections::HashMap;

use iced::keyboard::{self, Key};
use iced::widget::{column, container, image, scrollable, text, Space};
use iced::{Background, Border, Element, Event, Length, Subscription, Task, Theme};

use crate::backend::api::ApodClient;
use crate::backend::types::Fetched;
use crate::config::Config;
use crate::error::{ConfigError, FetchError};
use crate::gallery::bootstrap;
use crate::gallery::display::{Board, DisplayRegion, SearchInput};
use crate::gallery::render::Renderer;
use crate::gallery::search::SearchController;
use crate::ui::{card, search_bar, theme::DarkTheme};

// ============================================================================
// Presentation State
// ============================================================================

/// The search text box; editable only once enabled
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchBox {
    enabled: bool,
}

impl SearchInput for SearchBox {
    fn is_available(&self) -> bool {
        true
    }

    fn enable(&mut self) {
        self.enabled = true;
    }
}

#[derive(Debug, Clone)]
enum Picture {
    Loading,
    Ready(image::Handle),
    Failed,
}

// ============================================================================
// Application State
// ============================================================================

pub struct ApodView {
    board: Board,
    search_box: SearchBox,
    query: String,
    controller: Option<SearchController>,
    renderer: Renderer,
    pictures: HashMap<String, Picture>,
    http: reqwest::Client,
}

#[derive(Debug, Clone)]
pub enum Message {
    Loaded(Result<Fetched, FetchError>),
    SearchChanged(String),
    ToggleText(usize),
    PictureLoaded(String, Result<image::Handle, String>),
    IcedEvent(Event),
}

impl ApodView {
    /// Initial state plus the task that performs the single record fetch
    pub fn new(config: Result<Config, ConfigError>) -> (Self, Task<Message>) {
        let mut app = Self {
            board: Board::Empty,
            search_box: SearchBox::default(),
            query: String::new(),
            controller: None,
            renderer: Renderer::for_today(),
            pictures: HashMap::new(),
            http: reqwest::Client::new(),
        };

        let config = match config {
            Ok(config) => config,
            Err(e) => {
                tracing::error!("{}", e);
                app.board.show_message(&e.to_string());
                return (app, Task::none());
            }
        };

        bootstrap::begin(&mut app.board);
        let client = ApodClient::new(&config);
        let task = Task::perform(
            async move { client.fetch_current().await },
            Message::Loaded,
        );
        (app, task)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Loaded(fetched) => {
                match bootstrap::finish(fetched, self.renderer, &mut self.board, &mut self.search_box) {
                    Ok(controller) => {
                        self.controller = Some(controller);
                        self.load_pictures()
                    }
                    Err(_) => Task::none(),
                }
            }

            Message::SearchChanged(value) => {
                self.query = value;
                if let Some(controller) = &self.controller {
                    controller.on_input(&self.query, &mut self.board);
                }
                Task::none()
            }

            Message::ToggleText(index) => {
                if let Board::Cards(cards) = &mut self.board {
                    if let Some(card) = cards.get_mut(index) {
                        card.toggle();
                    }
                }
                Task::none()
            }

            Message::PictureLoaded(url, result) => {
                let picture = match result {
                    Ok(handle) => Picture::Ready(handle),
                    Err(e) => {
                        tracing::warn!("Could not load picture {}: {}", url, e);
                        Picture::Failed
                    }
                };
                self.pictures.insert(url, picture);
                Task::none()
            }

            Message::IcedEvent(event) => {
                if let Event::Keyboard(keyboard::Event::KeyPressed {
                    key: Key::Named(keyboard::key::Named::Escape),
                    ..
                }) = event
                {
                    if !self.query.is_empty() {
                        return self.update(Message::SearchChanged(String::new()));
                    }
                }
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let header = text("Astronomy Picture of the Day")
            .size(24)
            .color(DarkTheme::TEXT);

        let search = search_bar::view(
            &self.query,
            self.search_box.enabled.then_some(Message::SearchChanged),
        );

        let content = column![
            header,
            Space::with_height(12),
            search,
            Space::with_height(16),
            self.view_board(),
        ]
        .spacing(0);

        container(container(content).padding(24).width(Length::Fill).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme| container::Style {
                background: Some(Background::Color(DarkTheme::BACKGROUND)),
                border: Border::default(),
                ..Default::default()
            })
            .into()
    }

    fn view_board(&self) -> Element<'_, Message> {
        match &self.board {
            Board::Empty => Space::with_height(Length::Fill).into(),
            Board::Loading => centered(text("Loading...").size(16).color(DarkTheme::TEXT_MUTED)),
            Board::Message(message) => centered(text(message).size(16).color(DarkTheme::TEXT_MUTED)),
            Board::Cards(cards) => {
                let items: Vec<Element<'_, Message>> = cards
                    .iter()
                    .enumerate()
                    .map(|(i, c)| {
                        let picture = match self.pictures.get(&c.image_url) {
                            Some(Picture::Ready(handle)) => Some(handle),
                            _ => None,
                        };
                        card::view(c, picture, Message::ToggleText(i))
                    })
                    .collect();

                scrollable(column(items).spacing(16))
                    .height(Length::Fill)
                    .into()
            }
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        iced::event::listen().map(Message::IcedEvent)
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    // ========================================================================
    // Pictures
    // ========================================================================

    /// Start downloads for every card picture not seen yet
    fn load_pictures(&mut self) -> Task<Message> {
        let Board::Cards(cards) = &self.board else {
            return Task::none();
        };

        let urls: Vec<String> = cards
            .iter()
            .map(|c| c.image_url.clone())
            .filter(|url| !self.pictures.contains_key(url))
            .collect();

        let tasks: Vec<Task<Message>> = urls
            .into_iter()
            .map(|url| {
                self.pictures.insert(url.clone(), Picture::Loading);
                Task::perform(fetch_picture(self.http.clone(), url), |(url, result)| {
                    Message::PictureLoaded(url, result)
                })
            })
            .collect();

        Task::batch(tasks)
    }
}

fn centered<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

async fn fetch_picture(client: reqwest::Client, url: String) -> (String, Result<image::Handle, String>) {
    let result = async {
        let response = client.get(&url).send().await.map_err(|e| e.to_string())?;
        if !response.status().is_success() {
            return Err(format!("HTTP error! status: {}", response.status().as_u16()));
        }
        let bytes = response.bytes().await.map_err(|e| e.to_string())?;
        Ok(image::Handle::from_bytes(bytes.to_vec()))
    }
    .await;
    (url, result)
}
