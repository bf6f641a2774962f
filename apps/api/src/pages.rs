/// Kiosk home screen, served as a single static page. The scanner types the
/// CR number into the focused field; the script books as soon as enough
/// characters arrive, announces the outcome in Telugu over /tts, and moves
/// on to the printable slip.
pub const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="te">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>NIMS Revisit Kiosk</title>
<style>
body{margin:0;font-family:sans-serif;background:#0b2545;color:#fff;display:flex;flex-direction:column;align-items:center;justify-content:center;min-height:100vh}
h1{font-size:30px;margin:0 0 4px;letter-spacing:2px}
p.hint{margin:0 0 24px;color:#9fb3c8;font-size:18px}
form{display:flex;gap:12px}
input{font-size:26px;padding:12px;border-radius:8px;border:none;width:260px;text-align:center}
button{font-size:20px;padding:12px 20px;border:none;border-radius:8px;background:#06c;color:#fff}
.keypad{display:grid;grid-template-columns:repeat(3,86px);gap:10px;margin-top:22px}
.keypad .key{font-size:24px;padding:14px 0;background:#13315c}
#status{margin-top:22px;font-size:20px;min-height:30px;text-align:center;max-width:80vw}
#status.error{color:#ff6b6b}
#status.success{color:#7be495}
</style>
</head>
<body>
<h1>NIMS</h1>
<p class="hint">మీ CR నంబర్ స్కాన్ చేయండి లేదా నమోదు చేయండి</p>
<form id="kioskForm" autocomplete="off">
<input id="crInput" name="cr_number" inputmode="numeric" autofocus>
<button id="submitBtn" type="submit">బుక్ చేయండి</button>
</form>
<div class="keypad">
<button class="key">1</button><button class="key">2</button><button class="key">3</button>
<button class="key">4</button><button class="key">5</button><button class="key">6</button>
<button class="key">7</button><button class="key">8</button><button class="key">9</button>
<button class="key" data-action="clear">C</button><button class="key">0</button><button class="key" data-action="backspace">&#9003;</button>
</div>
<div id="status"></div>
<script>
(function(){
var form=document.getElementById('kioskForm');
var input=document.getElementById('crInput');
var statusEl=document.getElementById('status');
var MIN_LEN=5;
var submitTimer=null;
var busy=false;
var player=null;

function setStatus(message,kind){
  statusEl.textContent=message||'';
  statusEl.className=kind||'';
}

function focusInput(){
  if(document.activeElement!==input)input.focus();
}
setInterval(focusInput,3000);
window.addEventListener('load',focusInput);
window.addEventListener('focus',focusInput);

function speak(text,maxMs){
  var msg=String(text||'').trim();
  if(!msg)return Promise.resolve();
  var waitMs=typeof maxMs==='number'?maxMs:8000;
  return fetch('/tts',{
    method:'POST',
    headers:{'Content-Type':'application/json'},
    body:JSON.stringify({text:msg})
  }).then(function(res){
    if(!res.ok)throw new Error('tts unavailable');
    return res.blob();
  }).then(function(blob){
    return new Promise(function(resolve){
      if(!player){
        player=document.createElement('audio');
        player.setAttribute('playsinline','');
        player.style.display='none';
        document.body.appendChild(player);
      }
      var url=URL.createObjectURL(blob);
      var done=false;
      var finish=function(){
        if(done)return;
        done=true;
        try{URL.revokeObjectURL(url);}catch(e){}
        resolve();
      };
      player.src=url;
      player.addEventListener('ended',finish,{once:true});
      setTimeout(finish,waitMs);
      var p=player.play();
      if(p&&p.catch)p.catch(finish);
    });
  }).catch(function(){return Promise.resolve();});
}

Array.prototype.forEach.call(document.querySelectorAll('.keypad .key'),function(btn){
  btn.addEventListener('click',function(){
    var action=btn.getAttribute('data-action');
    if(action==='clear'){
      input.value='';
      setStatus('','');
    }else if(action==='backspace'){
      input.value=(input.value||'').slice(0,-1);
    }else{
      var digit=btn.textContent.trim();
      if(/^\d$/.test(digit))input.value=(input.value||'')+digit;
    }
    focusInput();
  });
});

input.addEventListener('input',function(){
  if(submitTimer)clearTimeout(submitTimer);
  submitTimer=setTimeout(function(){
    if((input.value||'').trim().length>=MIN_LEN&&!busy)form.requestSubmit();
  },200);
});
input.addEventListener('keydown',function(ev){
  if(ev.key==='Enter'){
    ev.preventDefault();
    form.requestSubmit();
  }
});

form.addEventListener('submit',function(ev){
  ev.preventDefault();
  var cr=(input.value||'').trim();
  if(!cr||busy)return;
  busy=true;
  setStatus('మీ అపాయింట్‌మెంట్ బుక్ అవుతోంది...','');
  var body=new URLSearchParams();
  body.set('cr_number',cr);
  fetch('/book_appointment',{
    method:'POST',
    headers:{'Content-Type':'application/x-www-form-urlencoded'},
    body:body.toString()
  }).then(function(res){
    return res.json().then(function(data){
      if(!res.ok){
        var err=new Error(data.message||'booking failed');
        err.code=data.code;
        throw err;
      }
      return data;
    });
  }).then(function(data){
    setStatus('అపాయింట్‌మెంట్ విజయవంతంగా బుక్ అయింది.','success');
    var line='మీ అపాయింట్‌మెంట్ '+(data.doctor||'డాక్టర్')+' వద్ద '+(data.appointment_time||'నిర్దేశిత సమయం')+'కి బుక్ అయింది.';
    speak(line,9000).then(function(){
      window.location.href='/print_slip/'+encodeURIComponent(data.appointment_id);
    });
  }).catch(function(err){
    var msg;
    if(err&&err.code==='EXPIRED_14D'){
      msg='మీ 14 రోజుల వాలిడిటీ సమయం పూర్తైంది. దయచేసి కొత్త రిజిస్ట్రేషన్ చేయించుకోండి.';
    }else{
      msg='తప్పు CR నంబర్. దయచేసి హెల్ప్ డెస్క్‌ను సంప్రదించండి.';
    }
    setStatus(msg,'error');
    speak(msg,8000).then(function(){
      window.location.href='/';
    });
  }).then(function(){
    busy=false;
  });
});
})();
</script>
</body>
</html>
"##;
