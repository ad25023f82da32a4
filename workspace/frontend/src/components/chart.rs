use common::{Figure, TraceKind};
use plotly::common::{Mode, Title};
use plotly::{Bar, Layout, Scatter};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue);
}

#[derive(Properties, PartialEq)]
pub struct FigureChartProps {
    /// DOM id of the chart container
    pub id: AttrValue,
    pub figure: Figure,
}

/// Renders a server-side figure description with plotly.js
#[function_component(FigureChart)]
pub fn figure_chart(props: &FigureChartProps) -> Html {
    let container_ref = use_node_ref();
    let figure = props.figure.clone();
    let div_id = props.id.to_string();

    use_effect_with(
        (container_ref.clone(), figure, div_id),
        move |(container_ref, figure, div_id)| {
            if let Some(element) = container_ref.cast::<HtmlElement>() {
                element.set_id(div_id);
                match plot_arguments(figure) {
                    Ok((data, layout)) => newPlot(div_id, data, layout),
                    Err(e) => log::error!("Failed to render chart {}: {:?}", div_id, e),
                }
            }
            || ()
        },
    );

    html! {
        <div ref={container_ref} style="width:100%; height:400px;"></div>
    }
}

/// Converts a figure into the `data` and `layout` arguments of `Plotly.newPlot`
fn plot_arguments(figure: &Figure) -> Result<(JsValue, JsValue), JsValue> {
    let data = js_sys::Array::new();
    for trace in &figure.traces {
        let json = match trace.kind {
            TraceKind::Line => {
                let scatter = Scatter::new(trace.x.clone(), trace.y.clone())
                    .mode(Mode::Lines)
                    .name(&trace.name);
                serde_json::to_string(&scatter)
            }
            TraceKind::Bar => {
                let bar = Bar::new(trace.x.clone(), trace.y.clone()).name(&trace.name);
                serde_json::to_string(&bar)
            }
        }
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
        data.push(&js_sys::JSON::parse(&json)?);
    }

    let layout = Layout::new()
        .title(Title::with_text(&figure.title))
        .height(400);
    let layout_json =
        serde_json::to_string(&layout).map_err(|e| JsValue::from_str(&e.to_string()))?;

    Ok((data.into(), js_sys::JSON::parse(&layout_json)?))
}
