use crate::models::MetaResponse;
use crate::series::SWEDEN;

/// Renders the dashboard page with the region selector and date bounds
/// filled in from the loaded data.
pub fn render_index(meta: &MetaResponse) -> String {
    let mut options = String::new();
    for region in &meta.regions {
        if region == SWEDEN {
            options.push_str(&format!(
                "<option value=\"{region}\" selected>{region}</option>"
            ));
        } else {
            options.push_str(&format!("<option value=\"{region}\">{region}</option>"));
        }
    }
    INDEX_HTML
        .replace("{{REGION_OPTIONS}}", &options)
        .replace("{{MIN_DATE}}", &meta.min_date.to_string())
        .replace("{{MAX_DATE}}", &meta.max_date.to_string())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>COVID-19 in Sweden: Cases, ICU Admissions, Deaths</title>
  <style>
    :root {
      --paper: #f4f5f7;
      --card: #ffffff;
      --ink: #1b1f24;
      --muted: #5c6570;
      --line: #d7dbe0;
      --accent: #648fff;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--paper);
      color: var(--ink);
      font-family: "Helvetica Neue", Arial, sans-serif;
      padding: 28px 16px 48px;
    }

    .page {
      width: min(860px, 100%);
      margin: 0 auto;
      display: grid;
      gap: 18px;
    }

    header {
      display: flex;
      flex-direction: column;
      gap: 6px;
    }

    h1 {
      margin: 0;
      font-size: clamp(1.4rem, 3vw, 1.8rem);
      font-weight: 600;
      letter-spacing: -0.01em;
    }

    .subtitle {
      margin: 0;
      color: var(--muted);
      font-size: 0.95rem;
    }

    .tabs {
      display: flex;
      gap: 4px;
      border-bottom: 2px solid var(--line);
    }

    .tab {
      appearance: none;
      background: transparent;
      border: none;
      border-bottom: 2px solid transparent;
      margin-bottom: -2px;
      padding: 8px 14px;
      font: inherit;
      font-size: 0.95rem;
      color: var(--muted);
      cursor: pointer;
    }

    .tab.active {
      color: var(--ink);
      font-weight: 600;
      border-bottom-color: var(--accent);
    }

    .panel {
      display: none;
    }

    .panel.active {
      display: grid;
      gap: 14px;
    }

    .intro p,
    .sources p {
      margin: 0;
      font-size: 0.92rem;
      line-height: 1.55;
    }

    .intro {
      display: grid;
      gap: 10px;
    }

    .sources {
      display: grid;
      gap: 12px;
    }

    .sources a {
      color: var(--accent);
    }

    .controls {
      display: flex;
      flex-wrap: wrap;
      gap: 16px;
      align-items: flex-end;
      background: var(--card);
      border: 1px solid var(--line);
      border-radius: 10px;
      padding: 14px 16px;
    }

    .control label {
      display: block;
      font-size: 0.72rem;
      text-transform: uppercase;
      letter-spacing: 0.08em;
      color: var(--muted);
      margin-bottom: 4px;
    }

    .control select,
    .control input {
      font: inherit;
      font-size: 0.9rem;
      padding: 6px 8px;
      border: 1px solid var(--line);
      border-radius: 6px;
      background: white;
      color: var(--ink);
    }

    .status {
      font-size: 0.85rem;
      color: var(--muted);
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .chart-card {
      background: var(--card);
      border: 1px solid var(--line);
      border-radius: 10px;
      padding: 14px 14px 8px;
    }

    .chart-card svg {
      width: 100%;
      height: auto;
      display: block;
    }

    .chart-card svg text {
      font-family: "Helvetica Neue", Arial, sans-serif;
    }

    .chart-bar {
      shape-rendering: crispEdges;
    }

    .chart-grid {
      stroke-width: 1;
    }

    .chart-axis {
      stroke-width: 1.5;
    }

    .chart-label {
      fill: var(--muted);
      font-size: 11px;
    }

    .chart-axis-title {
      fill: var(--ink);
      font-size: 12px;
      font-weight: 600;
    }

    .note {
      margin: 0;
      font-size: 0.85rem;
      font-style: italic;
      color: var(--muted);
    }

    footer {
      margin-top: 10px;
      font-size: 0.8rem;
      color: var(--muted);
      text-align: center;
    }

    @media (max-width: 560px) {
      .controls {
        flex-direction: column;
        align-items: stretch;
      }
    }
  </style>
</head>
<body>
  <main class="page">
    <header>
      <h1>COVID-19 in Sweden: Cases, ICU Admissions, Deaths</h1>
      <p class="subtitle">Weekly counts per county, from the Swedish Public Health Agency's open data.</p>
    </header>

    <div class="tabs" role="tablist">
      <button class="tab active" type="button" data-tab="graphs" role="tab" aria-selected="true">Graphs</button>
      <button class="tab" type="button" data-tab="sources" role="tab" aria-selected="false">Data sources</button>
    </div>

    <section id="panel-graphs" class="panel active">
      <div class="intro">
        <p>
          This dashboard visualizes the timeline of the spread of COVID-19 in Sweden:
          the number of confirmed cases, the number of people admitted to intensive
          care units, and deaths with an ongoing or recent confirmed COVID-19
          infection. The graphs are built from the most recently available weekly
          data shared by the Swedish Public Health Agency (Folkh&auml;lsomyndigheten);
          see the Data sources tab for details.
        </p>
        <p>
          Select an area of interest, either Sweden as a whole or an individual
          county, and narrow the timeframe to focus on a particular period. By
          default the graphs cover all of Sweden from the last week of February
          2020, when weekly reporting started, until the most recent update.
        </p>
        <p>
          The dates below indicate the first day of the week for which the numbers
          are shown. For example, 2020-02-24 stands for the week between February 24
          and March 1, 2020.
        </p>
      </div>

      <div class="controls">
        <div class="control">
          <label for="county">County</label>
          <select id="county">{{REGION_OPTIONS}}</select>
        </div>
        <div class="control">
          <label for="start-date">From</label>
          <input type="date" id="start-date" value="{{MIN_DATE}}" min="{{MIN_DATE}}" max="{{MAX_DATE}}" />
        </div>
        <div class="control">
          <label for="end-date">To</label>
          <input type="date" id="end-date" value="{{MAX_DATE}}" min="{{MIN_DATE}}" max="{{MAX_DATE}}" />
        </div>
      </div>

      <div class="status" id="status"></div>

      <div class="chart-card">
        <svg id="cases-chart" viewBox="0 0 760 300" aria-label="Confirmed cases chart" role="img"></svg>
      </div>
      <div class="chart-card">
        <svg id="icu-chart" viewBox="0 0 760 300" aria-label="Intensive care admissions chart" role="img"></svg>
      </div>
      <div class="chart-card">
        <svg id="deaths-chart" viewBox="0 0 760 300" aria-label="Deaths chart" role="img"></svg>
      </div>

      <p class="note">Please keep in mind that the range of the Y axis is different in each of these graphs.</p>
    </section>

    <section id="panel-sources" class="panel">
      <div class="sources">
        <p>
          All graphs are based on the
          <a href="https://www.folkhalsomyndigheten.se/smittskydd-beredskap/utbrott/aktuella-utbrott/covid-19/statistik-och-analyser/bekraftade-fall-i-sverige/">weekly statistics</a>
          openly shared by the Swedish Public Health Agency
          (Folkh&auml;lsomyndigheten). The numbers are updated once a week, on
          Thursdays at 14:00, at which point the figures for the previous week are
          added.
        </p>
        <p>
          Confirmed cases and deaths are reported through SmiNet, the notification
          system for diseases classified as dangerous to public health. A death is
          counted when a person with a laboratory-confirmed COVID-19 infection died,
          regardless of the cause of death. Intensive care admissions come from the
          Swedish Intensive Care Registry (Svenska Intensivv&aring;rdsregistret); a
          person admitted to intensive care more than once during the same week is
          counted once.
        </p>
        <p>
          The numbers shown for &quot;Sweden&quot; are national totals, computed by
          summing the reported counts over all counties for each week.
        </p>
      </div>
    </section>

    <footer>Data: Folkh&auml;lsomyndigheten, weekly COVID-19 statistics per county.</footer>
  </main>

  <script>
    const countyEl = document.getElementById('county');
    const startEl = document.getElementById('start-date');
    const endEl = document.getElementById('end-date');
    const statusEl = document.getElementById('status');
    const tabs = Array.from(document.querySelectorAll('.tab'));
    const panels = Array.from(document.querySelectorAll('.panel'));

    const CHARTS = [
      { svg: document.getElementById('cases-chart'), url: '/api/charts/cases' },
      { svg: document.getElementById('icu-chart'), url: '/api/charts/icu' },
      { svg: document.getElementById('deaths-chart'), url: '/api/charts/deaths' }
    ];

    const WEEK_MS = 7 * 24 * 60 * 60 * 1000;

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const weeksBetween = (fromIso, toIso) =>
      Math.round((new Date(toIso) - new Date(fromIso)) / WEEK_MS);

    const renderBarChart = (svg, chart) => {
      if (!chart.bars.length) {
        svg.innerHTML =
          '<text class="chart-label" x="50%" y="50%" text-anchor="middle">No data for this selection</text>';
        return;
      }

      const width = 760;
      const height = 300;
      const padLeft = 62;
      const padRight = 16;
      const padTop = 18;
      const padBottom = 52;
      const innerW = width - padLeft - padRight;
      const innerH = height - padTop - padBottom;

      const yMax = Math.max(chart.y_axis.range[1], 1);
      const y = (value) => padTop + innerH - (value / yMax) * innerH;

      const plotArea = `<rect x="${padLeft}" y="${padTop}" width="${innerW}" height="${innerH}" fill="${chart.background}" />`;

      const ticks = 5;
      let grid = '';
      for (let i = 0; i <= ticks; i += 1) {
        const value = (yMax * i) / ticks;
        const yPos = y(value);
        if (chart.y_axis.show_grid && i > 0) {
          grid += `<line class="chart-grid" x1="${padLeft}" y1="${yPos.toFixed(1)}" x2="${width - padRight}" y2="${yPos.toFixed(1)}" stroke="${chart.y_axis.grid_color}" />`;
        }
        grid += `<text class="chart-label" x="${padLeft - 8}" y="${(yPos + 4).toFixed(1)}" text-anchor="end">${Math.round(value)}</text>`;
      }

      const step = innerW / chart.bars.length;
      const barW = Math.max(Math.min(step * 0.8, 26), 1.5);
      const bars = chart.bars
        .map((bar, index) => {
          const x = padLeft + index * step + (step - barW) / 2;
          const top = y(bar.value);
          const barH = height - padBottom - top;
          const hover = `${chart.hover_label}&#10;Week: ${bar.date}&#10;${chart.value_label}: ${bar.value}`;
          return `<rect class="chart-bar" x="${x.toFixed(2)}" y="${top.toFixed(2)}" width="${barW.toFixed(2)}" height="${barH.toFixed(2)}" fill="${chart.color}"><title>${hover}</title></rect>`;
        })
        .join('');

      // Label every n-th week, counted from the fixed anchor tick so the
      // labelled weeks stay put when the window moves.
      const labelEvery = Math.max(1, Math.ceil(chart.bars.length / 8));
      const xLabels = chart.bars
        .map((bar, index) => {
          if (weeksBetween(chart.x_axis.tick0, bar.date) % labelEvery !== 0) {
            return '';
          }
          const x = padLeft + index * step + step / 2;
          return `<text class="chart-label" x="${x.toFixed(2)}" y="${height - padBottom + 18}" text-anchor="middle">${bar.date.slice(5)}</text>`;
        })
        .join('');

      const axes =
        `<line class="chart-axis" x1="${padLeft}" y1="${padTop}" x2="${padLeft}" y2="${height - padBottom}" stroke="${chart.y_axis.line_color}" />` +
        `<line class="chart-axis" x1="${padLeft}" y1="${height - padBottom}" x2="${width - padRight}" y2="${height - padBottom}" stroke="${chart.x_axis.line_color}" />`;

      const titles =
        `<text class="chart-axis-title" x="${padLeft + innerW / 2}" y="${height - 8}" text-anchor="middle">${chart.x_axis.title}</text>` +
        `<text class="chart-axis-title" transform="rotate(-90)" x="${-(padTop + innerH / 2)}" y="14" text-anchor="middle">${chart.y_axis.title}</text>`;

      svg.setAttribute('viewBox', `0 0 ${width} ${height}`);
      svg.innerHTML = `
        ${plotArea}
        ${grid}
        ${bars}
        ${axes}
        ${xLabels}
        ${titles}
      `;
    };

    const refreshCharts = async () => {
      setStatus('Loading...', 'info');
      const params = new URLSearchParams({
        region: countyEl.value,
        start_date: startEl.value,
        end_date: endEl.value
      });

      const responses = await Promise.all(CHARTS.map(({ url }) => fetch(`${url}?${params}`)));
      for (const res of responses) {
        if (!res.ok) {
          const msg = await res.text();
          throw new Error(msg || 'Request failed');
        }
      }

      const charts = await Promise.all(responses.map((res) => res.json()));
      charts.forEach((chart, index) => renderBarChart(CHARTS[index].svg, chart));
      setStatus('', '');
    };

    const setActiveTab = (tab) => {
      tabs.forEach((button) => {
        const isActive = button.dataset.tab === tab;
        button.classList.toggle('active', isActive);
        button.setAttribute('aria-selected', String(isActive));
      });
      panels.forEach((panel) => {
        panel.classList.toggle('active', panel.id === `panel-${tab}`);
      });
    };

    tabs.forEach((button) => {
      button.addEventListener('click', () => setActiveTab(button.dataset.tab));
    });

    countyEl.addEventListener('change', () => {
      refreshCharts().catch((err) => setStatus(err.message, 'error'));
    });
    startEl.addEventListener('change', () => {
      refreshCharts().catch((err) => setStatus(err.message, 'error'));
    });
    endEl.addEventListener('change', () => {
      refreshCharts().catch((err) => setStatus(err.message, 'error'));
    });

    refreshCharts().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn page_lists_regions_and_date_bounds() {
        let meta = MetaResponse {
            regions: vec!["Stockholm".into(), "Sweden".into(), "Uppsala".into()],
            min_date: NaiveDate::from_ymd_opt(2020, 2, 24).unwrap(),
            max_date: NaiveDate::from_ymd_opt(2021, 1, 4).unwrap(),
        };

        let page = render_index(&meta);

        assert!(page.contains("<option value=\"Sweden\" selected>Sweden</option>"));
        assert!(page.contains("<option value=\"Stockholm\">Stockholm</option>"));
        assert!(page.contains("value=\"2020-02-24\""));
        assert!(page.contains("max=\"2021-01-04\""));
        assert!(!page.contains("{{"));
    }
}
