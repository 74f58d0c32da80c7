use bevy::prelude::*;

use constants::render_settings::{CAPTION_BACKGROUND, CAPTION_FONT_SIZE, TIME_LABEL_FONT_SIZE};

use crate::engine::loading::narrative_assets::NarrativeAssets;

/// The current caption card at the bottom of the screen. At most one
/// exists; a new caption replaces the previous card entirely.
#[derive(Component)]
pub struct CaptionPanel;

/// Fixed top-left label showing the cosmological epoch of the caption.
#[derive(Component)]
pub struct TimeLabel;

/// Secondary label under the time label, visible only when the current
/// caption carries extra context.
#[derive(Component)]
pub struct TooltipLabel;

/// Request to replace the on-screen caption.
#[derive(Event, Debug, Clone)]
pub struct CaptionEvent {
    pub body: String,
    pub time_label: String,
    pub tooltip: Option<String>,
}

/// Spawn the persistent HUD labels. The caption card itself is spawned
/// per event.
pub fn spawn_caption_hud(commands: &mut Commands) {
    commands.spawn((
        Text::new(""),
        TextFont {
            font_size: TIME_LABEL_FONT_SIZE,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(12.0),
            left: Val::Px(12.0),
            ..default()
        },
        TimeLabel,
    ));
    commands.spawn((
        Text::new(""),
        TextFont {
            font_size: TIME_LABEL_FONT_SIZE * 0.8,
            ..default()
        },
        TextColor(Color::srgba(1.0, 1.0, 1.0, 0.7)),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(40.0),
            left: Val::Px(12.0),
            ..default()
        },
        Visibility::Hidden,
        TooltipLabel,
    ));
}

/// Replace the caption card and the HUD labels with the latest caption
/// event. When several arrive in one frame only the last one wins.
pub fn handle_caption_events(
    mut commands: Commands,
    mut events: EventReader<CaptionEvent>,
    panels: Query<Entity, With<CaptionPanel>>,
    mut time_labels: Query<&mut Text, (With<TimeLabel>, Without<TooltipLabel>)>,
    mut tooltip_labels: Query<(&mut Text, &mut Visibility), With<TooltipLabel>>,
    assets: Option<Res<NarrativeAssets>>,
) {
    let Some(event) = events.read().last() else {
        return;
    };

    for panel in panels.iter() {
        commands.entity(panel).despawn();
    }

    let font = assets
        .as_ref()
        .map(|a| a.font.clone())
        .unwrap_or_default();

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                bottom: Val::Px(48.0),
                left: Val::Percent(20.0),
                right: Val::Percent(20.0),
                padding: UiRect::all(Val::Px(16.0)),
                justify_content: JustifyContent::Center,
                ..default()
            },
            BackgroundColor(CAPTION_BACKGROUND),
            CaptionPanel,
        ))
        .with_children(|panel| {
            panel.spawn((
                Text::new(event.body.clone()),
                TextFont {
                    font,
                    font_size: CAPTION_FONT_SIZE,
                    ..default()
                },
                TextColor(Color::WHITE),
                TextLayout::new_with_justify(JustifyText::Center),
            ));
        });

    for mut text in time_labels.iter_mut() {
        text.0 = event.time_label.clone();
    }
    for (mut text, mut visibility) in tooltip_labels.iter_mut() {
        match &event.tooltip {
            Some(tooltip) => {
                text.0 = tooltip.clone();
                *visibility = Visibility::Visible;
            }
            None => {
                text.0.clear();
                *visibility = Visibility::Hidden;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> App {
        let mut app = App::new();
        app.add_event::<CaptionEvent>();
        app.add_systems(Update, handle_caption_events);
        app.world_mut().spawn((Text::new(""), TimeLabel));
        app.world_mut()
            .spawn((Text::new(""), Visibility::Hidden, TooltipLabel));
        app
    }

    fn send(app: &mut App, body: &str, time_label: &str, tooltip: Option<&str>) {
        app.world_mut().send_event(CaptionEvent {
            body: body.to_string(),
            time_label: time_label.to_string(),
            tooltip: tooltip.map(str::to_string),
        });
    }

    fn panel_count(app: &mut App) -> usize {
        app.world_mut()
            .query_filtered::<Entity, With<CaptionPanel>>()
            .iter(app.world())
            .count()
    }

    #[test]
    fn latest_caption_replaces_previous_card() {
        let mut app = test_app();
        send(&mut app, "first", "t=0", None);
        app.update();
        assert_eq!(panel_count(&mut app), 1);

        send(&mut app, "second", "t=1", None);
        app.update();
        assert_eq!(panel_count(&mut app), 1);
    }

    #[test]
    fn same_frame_captions_collapse_to_last() {
        let mut app = test_app();
        send(&mut app, "first", "t=0", None);
        send(&mut app, "second", "t=1", None);
        app.update();
        assert_eq!(panel_count(&mut app), 1);

        let mut labels = app.world_mut().query_filtered::<&Text, With<TimeLabel>>();
        let label = labels.iter(app.world()).next().unwrap();
        assert_eq!(label.0, "t=1");
    }

    #[test]
    fn tooltip_visibility_follows_caption() {
        let mut app = test_app();
        send(&mut app, "with tip", "t=0", Some("extra context"));
        app.update();
        {
            let mut tips = app
                .world_mut()
                .query_filtered::<&Visibility, With<TooltipLabel>>();
            assert_eq!(*tips.iter(app.world()).next().unwrap(), Visibility::Visible);
        }

        send(&mut app, "without tip", "t=1", None);
        app.update();
        let mut tips = app
            .world_mut()
            .query_filtered::<&Visibility, With<TooltipLabel>>();
        assert_eq!(*tips.iter(app.world()).next().unwrap(), Visibility::Hidden);
    }
}
