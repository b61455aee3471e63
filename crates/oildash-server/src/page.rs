//! The single dashboard page, embedded as a constant and served at `/`.
//!
//! The page pulls the slider definitions from `/api/sliders`, builds the
//! four range controls, and on every input change fetches both charts in
//! one request. A request sequence number drops responses that were
//! overtaken by a newer change, so the rendered pair is always fresh.

pub const DASHBOARD_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Vegetable Oil Sustainability Dashboard</title>
    <style>
        :root {
            --bg: #f6f7f9;
            --card: #ffffff;
            --border: #d9dde3;
            --text: #20262e;
            --muted: #6b7280;
            --accent: #2563eb;
        }
        * { box-sizing: border-box; margin: 0; padding: 0; }
        body {
            font-family: 'Segoe UI', 'Helvetica Neue', Arial, sans-serif;
            background: var(--bg);
            color: var(--text);
            padding: 24px;
        }
        .container { max-width: 1100px; margin: 0 auto; }
        h1 { font-size: 1.6rem; margin-bottom: 20px; }
        .controls {
            background: var(--card);
            border: 1px solid var(--border);
            border-radius: 10px;
            padding: 20px;
            margin-bottom: 24px;
        }
        .control { margin: 20px 0; }
        .control label {
            display: flex;
            justify-content: space-between;
            font-size: 0.9rem;
            margin-bottom: 6px;
        }
        .control label output { color: var(--accent); font-weight: 600; }
        .control input[type=range] { width: 100%; accent-color: var(--accent); }
        .marks {
            display: flex;
            justify-content: space-between;
            font-size: 0.7rem;
            color: var(--muted);
            margin-top: 2px;
        }
        .matched { font-size: 0.85rem; color: var(--muted); }
        .chart-card {
            background: var(--card);
            border: 1px solid var(--border);
            border-radius: 10px;
            padding: 20px;
            margin-bottom: 24px;
        }
        .chart-card h2 { font-size: 1.1rem; margin-bottom: 16px; }
        .chart {
            display: flex;
            align-items: flex-end;
            gap: 16px;
            height: 260px;
            border-bottom: 1px solid var(--border);
        }
        .bar-col {
            flex: 1;
            display: flex;
            flex-direction: column;
            align-items: center;
            justify-content: flex-end;
            height: 100%;
        }
        .bar-value { font-size: 0.75rem; color: var(--muted); margin-bottom: 4px; }
        .bar { width: 70%; border-radius: 4px 4px 0 0; }
        .axis {
            display: flex;
            gap: 16px;
            margin-top: 6px;
        }
        .axis span {
            flex: 1;
            text-align: center;
            font-size: 0.75rem;
            color: var(--text);
        }
        .empty {
            width: 100%;
            align-self: center;
            text-align: center;
            color: var(--muted);
            font-size: 0.9rem;
        }
    </style>
</head>
<body>
    <div class="container">
        <h1>Vegetable Oil Sustainability Dashboard</h1>

        <div class="controls">
            <div id="sliders"></div>
            <div class="matched" id="matched"></div>
        </div>

        <div class="chart-card">
            <h2 id="production-title"></h2>
            <div class="chart" id="production-chart"></div>
            <div class="axis" id="production-axis"></div>
        </div>

        <div class="chart-card">
            <h2 id="yield-title"></h2>
            <div class="chart" id="yield-chart"></div>
            <div class="axis" id="yield-axis"></div>
        </div>
    </div>

    <script>
        let requestSeq = 0;
        const inputs = {};

        function formatValue(value, step) {
            return step < 1 ? value.toFixed(1) : String(Math.round(value));
        }

        function buildSlider(spec) {
            const wrap = document.createElement('div');
            wrap.className = 'control';

            const label = document.createElement('label');
            const text = document.createElement('span');
            text.textContent = spec.label;
            const current = document.createElement('output');
            current.textContent = formatValue(spec.default, spec.step);
            label.append(text, current);

            const input = document.createElement('input');
            input.type = 'range';
            input.min = spec.min;
            input.max = spec.max;
            input.step = spec.step;
            input.value = spec.default;
            input.addEventListener('input', () => {
                current.textContent = formatValue(Number(input.value), spec.step);
                refresh();
            });
            inputs[spec.id] = input;

            const marks = document.createElement('div');
            marks.className = 'marks';
            for (let m = spec.min; m <= spec.max + spec.step / 2; m += spec.mark_every) {
                const mark = document.createElement('span');
                mark.textContent = formatValue(m, spec.mark_every);
                marks.appendChild(mark);
            }

            wrap.append(label, input, marks);
            return wrap;
        }

        function renderChart(name, chart) {
            document.getElementById(name + '-title').textContent = chart.title;
            const area = document.getElementById(name + '-chart');
            const axis = document.getElementById(name + '-axis');
            area.innerHTML = '';
            axis.innerHTML = '';

            if (chart.categories.length === 0) {
                const empty = document.createElement('div');
                empty.className = 'empty';
                empty.textContent = 'No varieties match the current thresholds';
                area.appendChild(empty);
                return;
            }

            const peak = Math.max(...chart.values);
            chart.categories.forEach((category, i) => {
                const col = document.createElement('div');
                col.className = 'bar-col';

                const value = document.createElement('div');
                value.className = 'bar-value';
                value.textContent = chart.values[i];

                const bar = document.createElement('div');
                bar.className = 'bar';
                bar.style.background = chart.colors[i];
                bar.style.height = (peak > 0 ? (chart.values[i] / peak) * 100 : 0) + '%';

                col.append(value, bar);
                area.appendChild(col);

                const tick = document.createElement('span');
                tick.textContent = category;
                axis.appendChild(tick);
            });
        }

        async function refresh() {
            const ticket = ++requestSeq;
            const params = new URLSearchParams();
            for (const [id, input] of Object.entries(inputs)) {
                params.set(id, input.value);
            }

            const response = await fetch('/api/charts?' + params);
            const data = await response.json();
            if (ticket !== requestSeq) {
                return; // a newer change already superseded this pair
            }

            renderChart('production', data.production);
            renderChart('yield', data.yield);
            document.getElementById('matched').textContent =
                data.matched + ' of 6 varieties within thresholds';
        }

        async function init() {
            const specs = await fetch('/api/sliders').then(r => r.json());
            const host = document.getElementById('sliders');
            specs.forEach(spec => host.appendChild(buildSlider(spec)));
            await refresh();
        }

        init();
    </script>
</body>
</html>
"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_wires_the_reactive_pipeline() {
        assert!(DASHBOARD_HTML.contains("Vegetable Oil Sustainability Dashboard"));
        assert!(DASHBOARD_HTML.contains("/api/sliders"));
        assert!(DASHBOARD_HTML.contains("/api/charts"));
        // Both chart areas exist and are replaced from a single response.
        assert!(DASHBOARD_HTML.contains("production-chart"));
        assert!(DASHBOARD_HTML.contains("yield-chart"));
    }
}
