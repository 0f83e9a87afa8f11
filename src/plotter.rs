use crate::error::AppError;
use crate::processing::{PlotData, PlotKind};
use hypertext::{html_elements, maud, GlobalAttributes, PreEscaped as Raw};
use serde::Serialize;

const ECHARTS_CDN: &str = "https://cdn.jsdelivr.net/npm/echarts/dist/echarts.min.js";

/// One entry of the ECharts `series` option.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EchartsSeries<'a> {
    name: &'a str,
    #[serde(rename = "type")]
    kind: &'static str,
    show_symbol: bool,
    symbol_size: u32,
    large: bool,
    /// Non-finite values serialize as `null`, which ECharts draws as a gap.
    data: Vec<[f64; 2]>,
}

/// Generates a self-contained HTML file with an interactive ECharts plot.
pub fn generate_html_plot(plot_data: &PlotData) -> Result<String, AppError> {
    let series_json = build_series_json(plot_data)?;
    let title_json = script_safe(&serde_json::to_string(&plot_data.title)?);

    let script = format!(
        r#"
            var myChart = echarts.init(document.getElementById('main'), 'light');
            myChart.setOption({{
                title: {{ text: {title} }},
                tooltip: {{ trigger: '{trigger}', axisPointer: {{ type: 'cross' }} }},
                grid: {{ left: '5%', right: '5%', bottom: '10%', containLabel: true }},
                toolbox: {{
                    feature: {{
                        dataZoom: {{ yAxisIndex: 'none' }},
                        restore: {{}},
                        saveAsImage: {{}}
                    }}
                }},
                xAxis: {{ type: 'value', scale: true, splitLine: {{ show: false }} }},
                yAxis: {{ type: 'value', scale: true, axisLine: {{ show: true }} }},
                dataZoom: [
                    {{ type: 'inside', start: 0, end: 100 }},
                    {{ type: 'slider', start: 0, end: 100, height: 40 }}
                ],
                series: [ {series} ]
            }});
            window.addEventListener('resize', function () {{ myChart.resize(); }});
        "#,
        title = title_json,
        trigger = match plot_data.kind {
            PlotKind::Line => "axis",
            PlotKind::Scatter => "item",
        },
        series = series_json,
    );

    let body = maud! {
        html {
            head {
                meta charset="utf-8";
                title { (plot_data.title.as_str()) }
                script src=(ECHARTS_CDN) {}
            }
            body {
                div #main style="width: 100%; height: 95vh;" {}
                script { (Raw(script.as_str())) }
            }
        }
    }
    .render();

    Ok(format!("<!DOCTYPE html>{}", body.as_str()))
}

/// Builds the JSON object for the single series.
fn build_series_json(plot_data: &PlotData) -> Result<String, AppError> {
    let series = EchartsSeries {
        name: &plot_data.series_name,
        kind: match plot_data.kind {
            PlotKind::Line => "line",
            PlotKind::Scatter => "scatter",
        },
        show_symbol: plot_data.kind == PlotKind::Scatter,
        symbol_size: 5,
        large: plot_data.kind == PlotKind::Scatter,
        data: plot_data.points.iter().map(|&(x, y)| [x, y]).collect(),
    };

    Ok(script_safe(&serde_json::to_string(&series)?))
}

/// Keeps JSON embedded in a `<script>` element from closing it early.
fn script_safe(json: &str) -> String {
    json.replace("</", "<\\/")
}
