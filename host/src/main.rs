//! # 演示程序
//!
//! 一个最小的聚光灯遮罩演示：3D 场景中一个移动的立方体作为目标
//! 锚点，遮罩圆孔实时跟随，Space 键在显示/隐藏之间切换（带动画）。

use macroquad::prelude::*;
use tracing::warn;

use host::{MaterialBackend, PerspectiveCamera};
use spotlight_core::{
    SpotlightConfig, SpotlightController, TargetAnchor, Vec3 as WorldVec3, Viewport,
};

/// 过渡动画时长（秒）
const TRANSITION_DURATION: f32 = 0.6;

fn window_conf() -> Conf {
    Conf {
        window_title: "Spotlight Overlay".to_owned(),
        window_width: 1280,
        window_height: 720,
        ..Default::default()
    }
}

/// 读取配置：有 config.json 用之，否则默认值
fn load_config() -> SpotlightConfig {
    match std::fs::read_to_string("config.json") {
        Ok(text) => SpotlightConfig::from_json(&text).unwrap_or_else(|e| {
            warn!(error = %e, "config.json 解析失败，使用默认配置");
            SpotlightConfig::default()
        }),
        Err(_) => SpotlightConfig::default(),
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt().init();

    let mut backend = MaterialBackend::new();
    if let Err(e) = backend.init() {
        eprintln!("❌ 聚光灯后端初始化失败: {}", e);
    }

    let mut controller = SpotlightController::new(load_config());
    if let Err(e) = controller.init(&backend) {
        warn!(error = %e, "着色契约检查失败，聚光灯已禁用");
    }

    let viewport = Viewport::new(screen_width(), screen_height());
    let mut camera = PerspectiveCamera::new(vec3(4.0, 3.0, 6.0), vec3(0.0, 1.0, 0.0), viewport);

    // 目标锚点：demo 里绕场景中心缓慢移动
    let anchor = TargetAnchor::new(WorldVec3::new(0.0, 1.0, 0.0));
    controller.set_target(anchor.handle());
    controller.set_radius(1.2).with_animation(TRANSITION_DURATION);
    controller.show();

    loop {
        let dt = get_frame_time();
        let viewport = Viewport::new(screen_width(), screen_height());
        camera.set_viewport(viewport);

        let t = get_time() as f32 * 0.5;
        let position = WorldVec3::new(t.cos() * 2.0, 1.0, t.sin() * 2.0);
        anchor.set_position(position);

        if is_key_pressed(KeyCode::Space) {
            controller.with_animation(TRANSITION_DURATION);
            if controller.is_visible() {
                controller.hide();
            } else {
                controller.show();
            }
        }

        // 3D 场景
        clear_background(Color::new(0.13, 0.14, 0.17, 1.00));
        set_camera(&camera.to_macroquad());
        draw_grid(20, 1.0, GRAY, DARKGRAY);
        draw_cube(
            vec3(position.x, position.y, position.z),
            vec3(1.0, 1.0, 1.0),
            None,
            GOLD,
        );
        set_default_camera();

        // 遮罩层
        controller.update(dt, &camera, viewport, &mut backend);
        backend.draw();

        draw_text("SPACE: toggle spotlight", 20.0, 30.0, 24.0, WHITE);

        next_frame().await;
    }
}
