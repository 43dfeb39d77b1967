use std::cell::RefCell;
use std::rc::Rc;

use common::{PageError, Panel, PanelAction, PanelButton, Result, Surface};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::js_error::render_error;

/// Receives button clicks from rendered panels
pub type Dispatcher = Rc<dyn Fn(PanelAction)>;

/// The device list and stream info containers appended to `<body>`.
pub struct DomSurface {
    document: Document,
    device_list: HtmlElement,
    stream_info: HtmlElement,
    dispatcher: RefCell<Option<Dispatcher>>,
}

impl DomSurface {
    pub fn new(document: Document) -> Result<Self> {
        let body = document
            .body()
            .ok_or_else(|| PageError::Render("No body".to_string()))?;

        let device_list = create_html(&document, "div")?;
        let stream_info = create_html(&document, "div")?;
        body.append_child(&device_list).map_err(render_error)?;
        body.append_child(&stream_info).map_err(render_error)?;

        Ok(Self {
            document,
            device_list,
            stream_info,
            dispatcher: RefCell::new(None),
        })
    }

    /// Buttons rendered after this call send their actions to `dispatcher`.
    pub fn set_dispatcher(&self, dispatcher: Dispatcher) {
        *self.dispatcher.borrow_mut() = Some(dispatcher);
    }

    fn render(&self, panel: &Panel) -> Result<HtmlElement> {
        let div = create_html(&self.document, "div")?;
        div.style()
            .set_property("border", "1px solid black")
            .map_err(render_error)?;

        for line in &panel.lines {
            let p = create_html(&self.document, "p")?;
            p.append_child(&self.document.create_text_node(line))
                .map_err(render_error)?;
            div.append_child(&p).map_err(render_error)?;
        }
        for child in &panel.children {
            let child = self.render(child)?;
            div.append_child(&child).map_err(render_error)?;
        }
        if let Some(button) = &panel.button {
            let button = self.render_button(button)?;
            div.append_child(&button).map_err(render_error)?;
        }
        Ok(div)
    }

    fn render_button(&self, button: &PanelButton) -> Result<HtmlElement> {
        let element = create_html(&self.document, "button")?;
        element.set_text_content(Some(button.caption));

        let action = button.action.clone();
        let dispatcher = self.dispatcher.borrow().clone();
        let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            match &dispatcher {
                Some(dispatch) => dispatch(action.clone()),
                None => log::warn!("No dispatcher for {:?}", action),
            }
        }) as Box<dyn FnMut(_)>);

        element
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
            .map_err(render_error)?;
        closure.forget();

        Ok(element)
    }
}

fn create_html(document: &Document, tag: &str) -> Result<HtmlElement> {
    document
        .create_element(tag)
        .map_err(render_error)?
        .dyn_into()
        .map_err(|_| PageError::Render(format!("<{}> is not an HtmlElement", tag)))
}

impl Surface for DomSurface {
    fn clear(&self) -> Result<()> {
        self.device_list.set_inner_html("");
        self.stream_info.set_inner_html("");
        Ok(())
    }

    fn show_device(&self, panel: &Panel) -> Result<()> {
        let panel = self.render(panel)?;
        self.device_list
            .append_child(&panel)
            .map_err(render_error)?;
        Ok(())
    }

    fn show_stream(&self, panel: &Panel) -> Result<()> {
        let panel = self.render(panel)?;
        self.stream_info
            .append_child(&panel)
            .map_err(render_error)?;
        Ok(())
    }
}
