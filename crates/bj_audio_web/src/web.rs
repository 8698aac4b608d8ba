use std::cell::RefCell;
use std::rc::Rc;

use bj_audio::page::{
    document_is_loading, BG_START_DATA_KEY, HIDDEN_CLASS, MUTE_CHECKBOX_ID, RESULT_DATA_KEY,
    RESULT_DELAY_DATA_KEY, SETTINGS_PANEL_SELECTOR, SETTINGS_TOGGLE_SELECTOR, SLIDER_KEY_DATA_KEY,
    SOUND_BUTTON_SELECTOR, SOUND_DATA_KEY, STAKE_INPUT_ID, START_BUTTON_ID, VOLUME_SLIDER_SELECTOR,
};
use bj_audio::prelude::*;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

mod dom;
mod media;
mod storage;

use media::MediaChannel;
use storage::LocalStorage;

type Controller = Rc<RefCell<AudioPreferencesController<LocalStorage, MediaChannel>>>;

/// Wire the audio layer into the current page once its DOM is ready.
pub fn start() {
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        warn("no document");
        return;
    };

    if document_is_loading(&doc.ready_state()) {
        let ready_doc = doc.clone();
        if let Err(e) = dom::listen(&doc, "DOMContentLoaded", move || wire_or_warn(&ready_doc)) {
            warn(&e);
        }
    } else {
        wire_or_warn(&doc);
    }
}

fn warn(msg: &str) {
    web_sys::console::warn_1(&format!("bj_audio: {msg}").into());
}

fn wire_or_warn(doc: &Document) {
    if let Err(e) = wire_page(doc) {
        warn(&e);
    }
}

fn wire_page(doc: &Document) -> Result<(), String> {
    let body = doc.body().ok_or("document has no body".to_string())?;
    let config = ControllerConfig::default().with_page_overrides(
        dom::data(&body, BG_START_DATA_KEY).as_deref(),
        dom::data(&body, RESULT_DELAY_DATA_KEY).as_deref(),
    );

    let channels = ChannelSet::from_fn(|k| MediaChannel::find(doc, k));
    let ctl: Controller = Rc::new(RefCell::new(AudioPreferencesController::new(
        LocalStorage,
        channels,
        config,
    )));
    ctl.borrow_mut().on_page_ready();

    schedule_result_sound(&ctl, &body)?;
    wire_sound_buttons(doc, &ctl)?;
    wire_stake_gate(doc)?;
    wire_settings_panel(doc)?;
    wire_mute_checkbox(doc, &ctl)?;
    wire_volume_sliders(doc, &ctl)?;
    Ok(())
}

fn schedule_result_sound(ctl: &Controller, body: &HtmlElement) -> Result<(), String> {
    let indicator = dom::data(body, RESULT_DATA_KEY).unwrap_or_default();
    let playback = ctl.borrow().result_playback(&indicator);
    match playback {
        None => Ok(()),
        Some(ResultPlayback::Immediate(key)) => {
            ctl.borrow_mut().play_safe(key);
            Ok(())
        }
        Some(ResultPlayback::Delayed(key, delay)) => {
            let ctl = ctl.clone();
            dom::set_timeout(delay, move || {
                ctl.borrow_mut().play_safe(key);
            })
        }
    }
}

fn wire_sound_buttons(doc: &Document, ctl: &Controller) -> Result<(), String> {
    for btn in dom::query_all::<HtmlElement>(doc, SOUND_BUTTON_SELECTOR)? {
        let ctl = ctl.clone();
        let tagged = btn.clone();
        dom::listen(&btn, "click", move || {
            let tag = dom::data(&tagged, SOUND_DATA_KEY);
            ctl.borrow_mut().on_button_click(tag.as_deref());
        })?;
    }
    Ok(())
}

fn wire_stake_gate(doc: &Document) -> Result<(), String> {
    let (Some(bet), Some(start)) = (
        dom::by_id::<HtmlInputElement>(doc, STAKE_INPUT_ID),
        doc.get_element_by_id(START_BUTTON_ID),
    ) else {
        return Ok(());
    };

    let target = bet.clone();
    let update = move || {
        let enabled = start_enabled(&bet.value(), &bet.max());
        let _ = start.toggle_attribute_with_force("disabled", !enabled);
    };
    update();
    dom::listen(&target, "input", update)
}

fn wire_settings_panel(doc: &Document) -> Result<(), String> {
    let (Some(toggle), Some(panel)) = (
        dom::query(doc, SETTINGS_TOGGLE_SELECTOR),
        dom::query(doc, SETTINGS_PANEL_SELECTOR),
    ) else {
        return Ok(());
    };

    dom::listen(&toggle, "click", move || toggle_hidden(&panel))
}

fn toggle_hidden(panel: &Element) {
    let _ = panel.class_list().toggle(HIDDEN_CLASS);
}

fn wire_mute_checkbox(doc: &Document, ctl: &Controller) -> Result<(), String> {
    let Some(checkbox) = dom::by_id::<HtmlInputElement>(doc, MUTE_CHECKBOX_ID) else {
        return Ok(());
    };
    checkbox.set_checked(ctl.borrow().prefs().master_muted);

    let ctl = ctl.clone();
    let source = checkbox.clone();
    dom::listen(&checkbox, "change", move || {
        ctl.borrow_mut().on_mute_change(source.checked());
    })
}

fn wire_volume_sliders(doc: &Document, ctl: &Controller) -> Result<(), String> {
    for slider in dom::query_all::<HtmlInputElement>(doc, VOLUME_SLIDER_SELECTOR)? {
        let Some(label) = dom::data(&slider, SLIDER_KEY_DATA_KEY).filter(|l| !l.is_empty()) else {
            continue;
        };
        slider.set_value(&ctl.borrow().slider_percent(&label).to_string());

        let ctl = ctl.clone();
        let source = slider.clone();
        dom::listen(&slider, "input", move || {
            ctl.borrow_mut().on_volume_input_label(&label, &source.value());
        })?;
    }
    Ok(())
}
