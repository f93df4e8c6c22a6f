use quarry::{
    input::{InputEvent, MouseButton},
    math::Vec2,
    quartz::{taffy::prelude::*, Button, Control, Scene, Widget},
    Obj,
};

struct Mixer {
    muted: bool,
    volume_changes: u32,
}

impl Mixer {
    fn on_mute(&mut self, sender: &mut Control) {
        self.muted = sender.is_selected();
        println!("muted: {}", self.muted);
    }
    fn on_volume(&mut self, _sender: &mut Control) {
        self.volume_changes += 1;
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = quarry::start()?;
    let mut scene = Scene::new()?;
    config.configure_scene(&mut scene);
    let root = scene.root();
    scene.set_style(
        root,
        Style {
            flex_direction: FlexDirection::Row,
            align_items: Some(AlignItems::Start),
            padding: Rect::length(64.0),
            gap: Size::length(16.0),
            ..Default::default()
        },
    )?;

    let mixer = Obj::new(Mixer {
        muted: false,
        volume_changes: 0,
    });

    let mut mute = Button::new_toggle("Mute", false);
    mute.set_background(config.state_colors());
    mute.control_mut().set_preferred_size(Vec2::new(128., 32.));
    mute.control_mut().set_action_target(&mixer, Mixer::on_mute);
    let (mute_node, _) = scene.create_widget(Style::default(), mute)?;
    scene.add_child(root, mute_node)?;

    let mut volume = Control::new();
    volume.set_continuous(true);
    volume.set_preferred_size(Vec2::new(256., 32.));
    config.configure_control(&mut volume);
    volume.set_action_target(&mixer, Mixer::on_volume);
    let (volume_node, _) = scene.create_widget(Style::default(), volume)?;
    scene.add_child(root, volume_node)?;

    scene.add_activated_listener(|node| println!("activated {:?}", node));
    scene.layout(800., 600.)?;

    let mut tracker = config.pointer_tracker();
    let primary = config.primary_button;
    let mut drag = vec![
        InputEvent::MouseMotion {
            position: Vec2::new(80., 80.),
        },
        InputEvent::MouseButton {
            button: primary,
            pressed: true,
        },
        InputEvent::MouseButton {
            button: primary,
            pressed: false,
        },
        InputEvent::MouseMotion {
            position: Vec2::new(240., 80.),
        },
        InputEvent::MouseButton {
            button: primary,
            pressed: true,
        },
    ];
    for x in [260., 300., 340.] {
        drag.push(InputEvent::MouseMotion {
            position: Vec2::new(x, 80.),
        });
    }
    drag.push(InputEvent::FocusLost);
    drag.push(InputEvent::MouseButton {
        button: MouseButton::Right,
        pressed: true,
    });

    for event in &drag {
        let interaction = tracker.apply(&mut scene, event);
        println!("{:?} -> {:?}", event, interaction);
    }

    let mixer = mixer.get();
    println!(
        "muted: {}, volume changes: {}",
        mixer.muted, mixer.volume_changes
    );
    Ok(())
}
