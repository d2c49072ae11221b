use serde::Serialize;

use showcase_core::model::{AssetPath, SceneSetup, Viewport};

/// Pinned three.js release, served as ES modules with bare imports rewritten.
pub const THREE_CDN_BASE: &str = "https://cdn.jsdelivr.net/npm/three@0.160.0";

/// Shared prelude: loads three.js and its addons once per page and caches
/// decoded models by path.
const LIBRARY_PRELUDE_TEMPLATE: &str = r#"
    if (!window.__showcaseLib) {
        const base = {base};
        window.__showcaseLib = Promise.all([
            import(base + "/+esm"),
            import(base + "/examples/jsm/loaders/GLTFLoader.js/+esm"),
            import(base + "/examples/jsm/postprocessing/EffectComposer.js/+esm"),
            import(base + "/examples/jsm/postprocessing/RenderPass.js/+esm"),
            import(base + "/examples/jsm/postprocessing/SMAAPass.js/+esm"),
        ]).then(([THREE, gltf, composer, render, smaa]) => ({
            THREE,
            GLTFLoader: gltf.GLTFLoader,
            EffectComposer: composer.EffectComposer,
            RenderPass: render.RenderPass,
            SMAAPass: smaa.SMAAPass,
        }));
    }
    window.__showcaseModels = window.__showcaseModels || {};
    const lib = await window.__showcaseLib;
    const errorText = (error) => String((error && error.message) || error || "unknown error");
"#;

const PRELOAD_SCRIPT_TEMPLATE: &str = r#"
    const paths = {paths};
    const manager = new lib.THREE.LoadingManager();
    const loader = new lib.GLTFLoader(manager);
    let failed = false;
    manager.onProgress = (_url, loaded, total) => {
        if (!failed) {
            dioxus.send({ kind: "progress", loaded, total });
        }
    };
    await new Promise((resolve) => {
        let pending = paths.length;
        if (pending === 0) { resolve(); return; }
        paths.forEach((path) => {
            loader.load(
                path,
                (gltf) => {
                    window.__showcaseModels[path] = gltf;
                    pending -= 1;
                    if (pending === 0) { resolve(); }
                },
                undefined,
                (error) => {
                    console.error("Error loading model " + path + ":", error);
                    if (!failed) {
                        failed = true;
                        dioxus.send({ kind: "failed", path, cause: errorText(error) });
                    }
                    resolve();
                },
            );
        });
    });
    if (!failed) {
        dioxus.send({ kind: "done" });
    }
"#;

const MOUNT_SCRIPT_TEMPLATE: &str = r#"
    const setup = {setup};
    const THREE = lib.THREE;
    const host = document.getElementById({host_id});
    if (!host) {
        return { kind: "failed", path: setup.initial_model, cause: "scene host missing" };
    }
    if (window.__showcaseScene) {
        return { kind: "done" };
    }

    const width = host.clientWidth || window.innerWidth;
    const height = host.clientHeight || window.innerHeight;
    const scene = new THREE.Scene();
    scene.background = new THREE.Color(setup.background);

    const camera = new THREE.PerspectiveCamera(setup.camera.fov, width / height, setup.camera.near, setup.camera.far);
    camera.position.z = setup.camera.distance;

    const renderer = new THREE.WebGLRenderer({ antialias: true });
    renderer.setSize(width, height);
    renderer.setPixelRatio(window.devicePixelRatio);
    renderer.shadowMap.enabled = true;
    host.appendChild(renderer.domElement);

    scene.add(new THREE.AmbientLight(setup.lights.ambient_color, setup.lights.ambient_intensity));
    const hemisphere = new THREE.HemisphereLight(
        setup.lights.sky_color,
        setup.lights.ground_color,
        setup.lights.hemisphere_intensity,
    );
    hemisphere.position.set(0, 0, 0);
    scene.add(hemisphere);

    const ground = new THREE.Mesh(
        new THREE.PlaneGeometry(setup.ground_size, setup.ground_size),
        new THREE.ShadowMaterial({ opacity: 0 }),
    );
    ground.rotation.x = -Math.PI / 2;
    scene.add(ground);

    const composer = new lib.EffectComposer(renderer);
    composer.addPass(new lib.RenderPass(scene, camera));
    composer.addPass(new lib.SMAAPass(width, height));

    const loadGltf = (path) => {
        const cached = window.__showcaseModels[path];
        if (cached) {
            delete window.__showcaseModels[path];
            return Promise.resolve(cached);
        }
        return new lib.GLTFLoader().loadAsync(path);
    };

    const state = {
        scene,
        camera,
        renderer,
        composer,
        current: null,
        mixer: null,
        clock: new THREE.Clock(),
        async show(path) {
            const gltf = await loadGltf(path);
            const model = gltf.scene;
            const p = setup.placement;
            model.scale.set(p.scale, p.scale, p.scale);
            model.position.set(p.position[0], p.position[1], p.position[2]);
            model.rotation.y = p.rotation_y;
            if (state.current) {
                scene.remove(state.current);
            }
            state.current = model;
            scene.add(model);
            state.mixer = new THREE.AnimationMixer(model);
            gltf.animations.forEach((clip) => state.mixer.clipAction(clip).play());
        },
        resize(w, h) {
            camera.aspect = w / h;
            camera.updateProjectionMatrix();
            renderer.setSize(w, h);
            composer.setSize(w, h);
        },
    };

    const animate = () => {
        requestAnimationFrame(animate);
        const delta = state.clock.getDelta();
        if (state.mixer) { state.mixer.update(delta); }
        composer.render();
    };

    try {
        await state.show(setup.initial_model);
    } catch (error) {
        console.error("Error loading model:", error);
        return { kind: "failed", path: setup.initial_model, cause: errorText(error) };
    }
    window.__showcaseScene = state;
    animate();
    return { kind: "done" };
"#;

const SHOW_ASSET_SCRIPT_TEMPLATE: &str = r#"
    const path = {path};
    const state = window.__showcaseScene;
    if (!state) {
        return { kind: "failed", path, cause: "scene not mounted" };
    }
    try {
        await state.show(path);
        return { kind: "done" };
    } catch (error) {
        console.error("Error loading model:", error);
        return { kind: "failed", path, cause: errorText(error) };
    }
"#;

const RESIZE_SCRIPT_TEMPLATE: &str = r#"
    const size = {viewport};
    if (window.__showcaseScene && size.width > 0 && size.height > 0) {
        window.__showcaseScene.resize(size.width, size.height);
    }
"#;

const INTERACTION_SCRIPT: &str = r#"
    const state = window.__showcaseScene;
    if (!state) {
        return;
    }
    const raycaster = new lib.THREE.Raycaster();
    const pointer = new lib.THREE.Vector2();
    window.addEventListener("mousedown", (event) => {
        pointer.x = (event.clientX / window.innerWidth) * 2 - 1;
        pointer.y = -(event.clientY / window.innerHeight) * 2 + 1;
        raycaster.setFromCamera(pointer, state.camera);
        if (raycaster.intersectObjects(state.scene.children, true).length > 0) {
            dioxus.send({ kind: "hit" });
        }
    });
    await new Promise(() => {});
"#;

const ALERT_SCRIPT_TEMPLATE: &str = r#"
    window.alert({message});
"#;

fn js_value(value: &impl Serialize) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "null".to_string())
}

fn with_prelude(body: &str) -> String {
    let prelude = LIBRARY_PRELUDE_TEMPLATE.replace("{base}", &js_value(&THREE_CDN_BASE));
    format!("{prelude}\n{body}")
}

pub fn preload_script(paths: &[AssetPath]) -> String {
    with_prelude(&PRELOAD_SCRIPT_TEMPLATE.replace("{paths}", &js_value(&paths)))
}

pub fn mount_script(host_id: &str, setup: &SceneSetup) -> String {
    with_prelude(
        &MOUNT_SCRIPT_TEMPLATE
            .replace("{setup}", &js_value(setup))
            .replace("{host_id}", &js_value(&host_id)),
    )
}

pub fn show_asset_script(path: &AssetPath) -> String {
    with_prelude(&SHOW_ASSET_SCRIPT_TEMPLATE.replace("{path}", &js_value(path)))
}

pub fn resize_script(viewport: Viewport) -> String {
    RESIZE_SCRIPT_TEMPLATE.replace("{viewport}", &js_value(&viewport))
}

pub fn interaction_script() -> String {
    with_prelude(INTERACTION_SCRIPT)
}

pub fn alert_script(message: &str) -> String {
    ALERT_SCRIPT_TEMPLATE.replace("{message}", &js_value(&message))
}
